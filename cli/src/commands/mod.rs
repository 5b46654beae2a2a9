pub mod admin;
pub mod info;
pub mod run;
