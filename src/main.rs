use booknav::ui::output;

fn main() {
    if let Err(err) = booknav::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
