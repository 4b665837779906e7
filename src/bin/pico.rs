use std::io::{self, Write};
use std::rc::Rc;
use std::path::PathBuf;
use clap::{Command, Arg, ArgMatches};

use pico::frontend;
use pico::InterpretError;
use pico::source::{ModuleSource, SourceType};
use pico::runtime::Environment;

fn main() {
    env_logger::init();

    let app = Command::new("pico")
        .version("0.1")
        .about("An interpreter for the PicoLang programming language")
        .arg(
            Arg::new("file")
            .index(1)
            .help("Path to input script file")
            .value_name("FILE")
        )
        .arg(
            Arg::new("cmd")
            .short('c')
            .help("Execute a snippet then exit")
            .value_name("CMD")
        )
        .arg(
            Arg::new("interactive")
            .short('i')
            .help("Drop into an interactive REPL after executing")
        )
        .arg(
            Arg::new("parse_only")
            .short('P')
            .help("Parse and print AST instead of executing")
        );

    let version = app.get_version().unwrap();
    let args = app.get_matches();

    let mut module = None;
    if let Some(s) = args.value_of("cmd") {
        let source = SourceType::String(s.to_string());
        module = Some(ModuleSource::new("<cmd>", source));
    } else if let Some(s) = args.value_of("file") {
        let source = SourceType::File(PathBuf::from(s));
        module = Some(ModuleSource::new(s, source));
    }

    let env = Environment::new_root();

    if module.is_none() {
        start_repl(version, env);
        return;
    }

    let module = module.unwrap();

    if args.is_present("parse_only") {
        parse_and_print_ast(&args, module);
    } else {
        let ok = execute_module(&args, &module, &env);

        if ok && args.is_present("interactive") {
            start_repl(version, env);
        }
    }
}

fn start_repl(version: &str, env: Rc<Environment>) {
    println!("\nPicoLang Version {}\n", version);

    let mut repl = Repl::new(env);
    repl.run();
}

fn execute_module(_args: &ArgMatches, module: &ModuleSource, env: &Rc<Environment>) -> bool {
    let source_text = match module.source_text() {
        Ok(source_text) => source_text,

        Err(error) => {
            println!("Error reading source: {}.", error);
            return false;
        },
    };

    match pico::interpret_source(&source_text, env) {
        Ok(..) => true,

        Err(error) => {
            if matches!(error, InterpretError::Syntax(..)) {
                println!("Errors in file \"{}\":\n", module.name());
            }
            pico::print_interpret_error(&source_text, &error);
            false
        },
    }
}


fn parse_and_print_ast(_args: &ArgMatches, module: ModuleSource) {
    let source_text = match module.source_text() {
        Ok(source_text) => source_text,

        Err(error) => {
            println!("Error reading source: {}.", error);
            return;
        },
    };

    match pico::parse_source(&source_text) {
        Err(errors) => {
            println!("Errors in file \"{}\":\n", module.name());
            frontend::print_source_errors(&source_text, &errors);
        },
        Ok(ast) => println!("{:#?}", ast),
    }
}


//////// REPL ////////


const PROMT_START: &str = ">>> ";
const PROMT_CONTINUE: &str = "... ";

struct Repl {
    env: Rc<Environment>,
}

enum ReadLine {
    Ok(String),
    Empty,
    Restart,
    Quit,
}

fn classify_line(bytes_read: usize, input: &str) -> ReadLine {
    // a zero byte read means stdin was closed
    if bytes_read == 0 {
        return ReadLine::Quit;
    }

    let input = input.trim_end();

    if input.is_empty() {
        return ReadLine::Empty;
    }

    if input == "quit" || input.chars().any(|c| c == '\x04') {
        return ReadLine::Quit;
    }

    ReadLine::Ok(input.to_string())
}

impl Repl {
    pub fn new(env: Rc<Environment>) -> Self {
        Self { env }
    }

    fn read_line(&self, prompt: &'static str) -> ReadLine {
        io::stdout().write(prompt.as_bytes()).unwrap();
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(bytes_read) => classify_line(bytes_read, &input),
            Err(error) => {
                println!("Could not read input: {}", error);
                ReadLine::Restart
            },
        }
    }

    pub fn run(&mut self) {

        loop {
            let mut input = String::new();
            let mut parse_result = None;

            loop {
                let prompt =
                    if input.is_empty() { PROMT_START }
                    else { PROMT_CONTINUE };

                match self.read_line(prompt) {
                    ReadLine::Quit => return,
                    ReadLine::Restart => continue,
                    ReadLine::Empty => {
                        if input.is_empty() { continue }
                        else { break }
                    },
                    ReadLine::Ok(line) => {
                        input.push_str(&line);

                        if line.trim_end().ends_with(';') {
                            break
                        }

                        // If we can't parse the input without errors, then we assume we need to continue
                        if let Ok(ast) = pico::parse_source(&input) {
                            parse_result.replace(ast);
                            break
                        }

                        input.push('\n')
                    }
                }
            }

            let parse_result =
                if let Some(ast) = parse_result { Ok(ast) }
                else { pico::parse_source(&input) };

            let ast = match parse_result {
                Ok(ast) => ast,

                Err(errors) => {
                    frontend::print_source_errors(&input, &errors);
                    continue;
                },
            };

            match pico::interpreter::interpret(&ast, &self.env) {
                Ok(Some(value)) => println!("{}", value),
                Ok(None) => { },
                Err(error) => println!("Runtime error: {}.", error),
            }
        }

    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_stdin_quits_the_repl() {
        // read_line() reports a closed stream as zero bytes read
        assert!(matches!(classify_line(0, ""), ReadLine::Quit));
    }

    #[test]
    fn quit_command_and_eot_quit_the_repl() {
        assert!(matches!(classify_line(5, "quit\n"), ReadLine::Quit));
        assert!(matches!(classify_line(2, "\x04\n"), ReadLine::Quit));
    }

    #[test]
    fn blank_line_is_empty_not_quit() {
        assert!(matches!(classify_line(1, "\n"), ReadLine::Empty));
        assert!(matches!(classify_line(3, "  \n"), ReadLine::Empty));
    }

    #[test]
    fn input_is_trimmed() {
        let line = classify_line(9, "let x = 1\n");
        assert!(matches!(line, ReadLine::Ok(text) if text == "let x = 1"));
    }
}
