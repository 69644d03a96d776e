use lumbung::{
    executor::engine::{Engine, Response, TableDescription},
    planner::parser,
    types::row::Row,
};
use rustyline::{DefaultEditor, Result, error::ReadlineError};

fn read_multiline_command(rl: &mut DefaultEditor) -> Result<String> {
    let mut input = String::new();
    let mut prompt = "lumbung> ".to_string();

    loop {
        let readline = rl.readline(&prompt);
        match readline {
            Ok(line) => {
                let trimmed_line = line.trim_end();

                // Check if line ends with backslash (multiline continuation)
                if trimmed_line.ends_with('\\') {
                    let mut line_without_backslash = trimmed_line.to_string();
                    line_without_backslash.pop();
                    input.push_str(&line_without_backslash);
                    input.push(' ');

                    prompt = "      -> ".to_string();
                } else {
                    input.push_str(trimmed_line);
                    break;
                }
            }
            Err(err) => return Err(err),
        }
    }

    Ok(input)
}

fn print_row(row: &Row) {
    let rendered: Vec<String> = row.values.iter().map(|value| value.to_string()).collect();
    println!("\t{}", rendered.join("\t"));
}

fn print_description(description: &TableDescription) {
    println!("\ntable name: {}\n", description.name);
    for column in &description.columns {
        print!(" | {} {}", column.name, column.kind.data_type());
    }
    println!("\n\n{} row(s)\n", description.row_count);
}

fn render(response: &Response) {
    match response {
        Response::Created { table_name } => {
            println!("table '{}' created", table_name);
        }
        Response::Inserted { row_id } => {
            println!("inserted row {}", row_id);
        }
        Response::Rows { header, rows } => {
            if !header.is_empty() {
                println!("\t{}", header.join("\t"));
            }
            for row in rows {
                print_row(row);
            }
            println!("{} row(s)", rows.len());
        }
        Response::Tables(Some(description)) => {
            print_description(description);
        }
        Response::Tables(None) => {
            println!("no tables created");
        }
        Response::Exit => {}
    }
}

fn main() -> Result<()> {
    println!("LUMBUNG DB");
    println!("Enter '.exit' to leave, '.tables' to describe the table.");
    println!("Use '\\' at the end of a line for multiline input.\n");

    let mut engine = Engine::new();
    let mut rl = DefaultEditor::new()?;

    loop {
        match read_multiline_command(&mut rl) {
            Ok(input) => {
                let command = input.trim().to_string();
                if command.is_empty() {
                    continue;
                }
                rl.add_history_entry(&command)?;

                let statement = parser::prepare(&command, engine.schema());
                match statement {
                    Ok(statement) => match engine.execute(statement) {
                        Ok(Response::Exit) => {
                            println!("Goodbye!");
                            break;
                        }
                        Ok(response) => render(&response),
                        Err(err) => println!("error: {}", err),
                    },
                    Err(err) => println!("error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("EOF");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
