use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use sctpstream_message::{MessageWriter, SctpMessage};
use serde::{Deserialize, Serialize};

use crate::cmd::EncodeArgs;
use crate::exit::{io_error, record_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_json, summary_table, OutputFormat};

/// One JSON input line.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MessageLine {
    protocol: u32,
    stream: u16,
    #[serde(default = "default_complete")]
    complete: bool,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    bytes: Option<Vec<u8>>,
}

fn default_complete() -> bool {
    true
}

#[derive(Serialize)]
struct EncodeOutput<'a> {
    input: &'a str,
    output: &'a str,
    records: usize,
}

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let input = File::open(&args.input)
        .map_err(|err| io_error(&format!("failed opening {}", args.input.display()), err))?;
    let output = File::create(&args.output)
        .map_err(|err| io_error(&format!("failed creating {}", args.output.display()), err))?;

    let records = encode_lines(BufReader::new(input), BufWriter::new(output))?;
    tracing::info!(records, output = %args.output.display(), "capture written");

    let input = args.input.display().to_string();
    let output = args.output.display().to_string();
    match format {
        OutputFormat::Json => print_json(&EncodeOutput {
            input: &input,
            output: &output,
            records,
        }),
        OutputFormat::Table => println!(
            "{}",
            summary_table([
                ("input", input),
                ("output", output),
                ("records", records.to_string()),
            ])
        ),
        OutputFormat::Pretty => println!("wrote {records} records to {output}"),
    }

    Ok(SUCCESS)
}

/// Encode every non-blank JSON line of `input` as a capture record.
fn encode_lines<R: BufRead, W: Write>(input: R, output: W) -> CliResult<usize> {
    let mut writer = MessageWriter::new(output);
    let mut records = 0usize;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|err| io_error(&format!("failed reading line {line_no}"), err))?;
        if line.trim().is_empty() {
            continue;
        }

        let msg = parse_line(&line)
            .map_err(|reason| CliError::new(DATA_INVALID, format!("line {line_no}: {reason}")))?;
        writer
            .write_message(&msg)
            .map_err(|err| record_error(&format!("line {line_no}"), err))?;
        records += 1;
    }

    writer
        .flush()
        .map_err(|err| record_error("failed flushing capture", err))?;
    Ok(records)
}

fn parse_line(line: &str) -> Result<SctpMessage, String> {
    let parsed: MessageLine = serde_json::from_str(line).map_err(|err| err.to_string())?;
    let payload = match (parsed.text, parsed.bytes) {
        (Some(_), Some(_)) => return Err("set either \"text\" or \"bytes\", not both".into()),
        (Some(text), None) => text.into_bytes(),
        (None, Some(bytes)) => bytes,
        (None, None) => Vec::new(),
    };

    Ok(SctpMessage {
        protocol_identifier: parsed.protocol,
        stream_identifier: parsed.stream,
        complete: parsed.complete,
        payload: payload.into(),
    })
}
