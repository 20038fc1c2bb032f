//! Interactive shell: one equation per line; prints the problem, its most
//! general unifier, and the matcher result.

use std::io::{self, BufRead, Write};

use agum::{match_terms, parse_equation, unify};

const USAGE: &str = "\
Enter an equation such as `2x + y = 3z` to see its unifier and matcher.
Commands:
  :? or :help    show this message
  :quit          exit";

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "agum> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => {}
            ":?" | ":help" => println!("{USAGE}"),
            ":quit" => return Ok(()),
            _ if input.starts_with(':') => {
                println!("unknown command `{input}`; try :? for help");
            }
            _ => match parse_equation(input) {
                Ok(equation) => {
                    println!("Problem:   {equation}");
                    println!("Unifier:   {}", unify(&equation));
                    match match_terms(&equation) {
                        Ok(subst) => println!("Matcher:   {subst}"),
                        Err(_) => println!("Matcher:   no solution"),
                    }
                }
                Err(err) => println!("error: {err}"),
            },
        }
        write!(stdout, "agum> ")?;
        stdout.flush()?;
    }
    Ok(())
}
