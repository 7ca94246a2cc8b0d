pub mod a001_account;
