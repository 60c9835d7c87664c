pub mod init;
pub mod projects;
pub mod run;
pub mod send;
pub mod skills;
