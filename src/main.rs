use mshell::Interpreter;

fn main() {
    let mut shell = Interpreter::default();
    if let Err(err) = shell.repl() {
        eprintln!("mshell: {err:#}");
        std::process::exit(1);
    }
}
