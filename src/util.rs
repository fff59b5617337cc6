use std::io::{self, BufRead, Write};

/// Print `prompt` and read one line from stdin. `None` on end of input.
pub fn prompt_input(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim_end().to_string()),
    }
}

pub fn parse_answer(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question. Empty input or end of input picks `default`;
/// anything unrecognised asks again.
pub fn confirm(question: &str, default: bool) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        let Some(input) = prompt_input(&format!("{question} {hint}: ")) else {
            println!();
            return default;
        };
        if input.trim().is_empty() {
            return default;
        }
        if let Some(answer) = parse_answer(&input) {
            return answer;
        }
        eprintln!("Error: invalid input");
    }
}
