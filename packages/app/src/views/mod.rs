mod shell;
pub use shell::Shell;

mod login;
pub use login::Login;

mod templates;
pub use templates::Templates;

mod builder;
pub use builder::Builder;
