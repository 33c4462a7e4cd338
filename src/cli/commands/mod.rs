pub mod check;
pub mod init;
pub mod keys;
pub mod locales;
pub mod project;
pub mod translate;
