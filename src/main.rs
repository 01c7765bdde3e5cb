use mysh::Interpreter;

fn main() -> anyhow::Result<()> {
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    Interpreter::new(stdin, stdout).run()
}
