use std::fs::File;
use std::io::{BufReader, Read};

use sctpstream_message::MessageReader;

use crate::cmd::InspectArgs;
use crate::exit::{io_error, record_error, CliResult, SUCCESS};
use crate::output::{print_messages, MessageOutput, OutputFormat};

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let file = File::open(&args.capture)
        .map_err(|err| io_error(&format!("failed opening {}", args.capture.display()), err))?;

    let rows = collect_rows(
        MessageReader::new(BufReader::new(file)),
        args.streams.as_deref(),
    )?;
    print_messages(&rows, format);

    Ok(SUCCESS)
}

fn collect_rows<R: Read>(
    reader: MessageReader<R>,
    streams: Option<&[u16]>,
) -> CliResult<Vec<MessageOutput>> {
    let mut rows = Vec::new();
    for (index, msg) in reader.enumerate() {
        let msg = msg.map_err(|err| record_error(&format!("record {index}"), err))?;
        if let Some(streams) = streams {
            if !streams.contains(&msg.stream_identifier) {
                continue;
            }
        }
        rows.push(MessageOutput::new(index, &msg));
    }
    Ok(rows)
}
