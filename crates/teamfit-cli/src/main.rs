use clap::Parser;
use teamfit::{run, Cli};

#[cfg(unix)]
fn reset_sigpipe() {
    // Restore default SIGPIPE behavior so `teamfit ... | head` exits quietly.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

fn main() {
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
