//! Command-line argument handling

/// Execution mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Train,
    Predict,
}

/// A fully parsed analyzer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mode: Mode,
    /// File holding the network to load.
    pub load_file: String,
    /// File holding the FEN dataset.
    pub data_file: String,
    /// Where the trained network is written; defaults to the load file.
    pub save_file: String,
}

/// Outcome of argument parsing: either run, or print usage and leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(Invocation),
}

pub fn print_usage() {
    println!("USAGE");
    println!("    analyzer [--predict | --train [--save SAVEFILE]] LOADFILE FILE");
    println!();
    println!("DESCRIPTION");
    println!("    --train     Launch in training mode. FILE contains FEN positions and labels.");
    println!("    --predict   Launch in prediction mode. FILE contains FEN positions.");
    println!("    --save      Save network to SAVEFILE (train mode only).");
    println!("    LOADFILE    File containing the neural network.");
    println!("    FILE        File containing chessboards in FEN notation.");
}

/// Walks the raw argument list.
///
/// `--save` consumes the following token; the first two free tokens become
/// the network file and the data file, in that order.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    if matches!(args.first().map(String::as_str), Some("--help") | Some("-h")) {
        return Ok(Command::Help);
    }

    let mut mode = None;
    let mut save_file: Option<&str> = None;
    let mut load_file: Option<&str> = None;
    let mut data_file: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--train" => mode = Some(Mode::Train),
            "--predict" => mode = Some(Mode::Predict),
            "--save" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--save requires a filename".to_string())?;
                save_file = Some(value.as_str());
                i += 1;
            }
            other if load_file.is_none() => load_file = Some(other),
            other if data_file.is_none() => data_file = Some(other),
            _ => {}
        }
        i += 1;
    }

    let (Some(mode), Some(load_file), Some(data_file)) = (mode, load_file, data_file) else {
        return Err("Missing required arguments".to_string());
    };

    Ok(Command::Run(Invocation {
        mode,
        load_file: load_file.to_string(),
        data_file: data_file.to_string(),
        save_file: save_file.unwrap_or(load_file).to_string(),
    }))
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod args_tests;
