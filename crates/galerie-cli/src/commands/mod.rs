pub mod exhibitions;
pub mod run;
