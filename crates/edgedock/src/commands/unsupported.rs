//! Stand-ins for the Windows-only commands.

fn bail() -> ! {
    eprintln!("Error: this command requires Windows.");
    std::process::exit(1);
}

macro_rules! unsupported {
    ($($name:ident($($arg:ty),*)),* $(,)?) => {
        $(
            pub mod $name {
                pub fn execute($(_: $arg),*) {
                    super::bail()
                }
            }
        )*
    };
}

unsupported! {
    action(edgedock_core::Action),
    daemon(),
    start(),
    status(),
    stop(),
    find(Option<&str>),
}
