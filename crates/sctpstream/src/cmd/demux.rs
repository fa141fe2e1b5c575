use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use sctpstream_handler::{InboundBuffers, InboundByteStreamHandler, StreamSelector};
use sctpstream_message::MessageReader;
use serde::Serialize;
use tracing::{info, warn};

use crate::cmd::DemuxArgs;
use crate::exit::{
    handler_error, io_error, record_error, CliResult, PROTOCOL_VIOLATION, SUCCESS,
};
use crate::output::{message_table, print_json, summary_table, MessageOutput, OutputFormat};

/// Result of running a capture through the handler.
#[derive(Debug, Serialize)]
pub struct DemuxReport {
    pub selector: StreamSelector,
    pub messages_read: usize,
    pub consumed: usize,
    pub bytes_extracted: usize,
    pub forwarded: Vec<MessageOutput>,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Serialize)]
pub struct Violation {
    pub index: usize,
    pub error: String,
}

pub fn run(args: DemuxArgs, format: OutputFormat) -> CliResult<i32> {
    let handler = InboundByteStreamHandler::new(args.protocol, args.stream);
    let file = File::open(&args.capture)
        .map_err(|err| io_error(&format!("failed opening {}", args.capture.display()), err))?;
    let reader = MessageReader::new(BufReader::new(file));

    let report = match &args.output {
        Some(path) => {
            let out = File::create(path)
                .map_err(|err| io_error(&format!("failed creating {}", path.display()), err))?;
            let mut sink = BufWriter::new(out);
            let report = demux_capture(&handler, reader, &mut sink, args.continue_on_error)?;
            sink.flush()
                .map_err(|err| io_error("failed flushing byte stream", err))?;
            report
        }
        None => demux_capture(&handler, reader, &mut io::sink(), args.continue_on_error)?,
    };

    info!(
        selector = %report.selector,
        consumed = report.consumed,
        forwarded = report.forwarded.len(),
        bytes = report.bytes_extracted,
        "demux finished"
    );
    print_report(&report, format);

    if report.violations.is_empty() {
        Ok(SUCCESS)
    } else {
        Ok(PROTOCOL_VIOLATION)
    }
}

/// Feed every record through `handler`, draining the byte buffer into `sink`.
///
/// An incomplete matching message stops the run unless `continue_on_error`
/// is set, in which case it is logged and recorded in the report.
pub fn demux_capture<R: Read, W: Write>(
    handler: &InboundByteStreamHandler,
    mut reader: MessageReader<R>,
    sink: &mut W,
    continue_on_error: bool,
) -> CliResult<DemuxReport> {
    let mut buffers = InboundBuffers::new();
    let mut report = DemuxReport {
        selector: handler.selector(),
        messages_read: 0,
        consumed: 0,
        bytes_extracted: 0,
        forwarded: Vec::new(),
        violations: Vec::new(),
    };

    for (index, msg) in reader.by_ref().enumerate() {
        let msg = msg.map_err(|err| record_error(&format!("record {index}"), err))?;
        let decodable = handler.is_decodable(&msg);

        if let Err(err) = handler.process(&mut buffers, msg) {
            if !continue_on_error {
                return Err(handler_error(&format!("message {index}"), err));
            }
            warn!(index, error = %err, "skipping message");
            report.violations.push(Violation {
                index,
                error: err.to_string(),
            });
            continue;
        }

        if decodable {
            report.consumed += 1;
            let bytes = buffers.take_bytes();
            sink.write_all(&bytes)
                .map_err(|err| io_error("failed writing byte stream", err))?;
            report.bytes_extracted += bytes.len();
        } else if let Some(forwarded) = buffers.pop_message() {
            report.forwarded.push(MessageOutput::new(index, &forwarded));
        }
    }

    report.messages_read = reader.records_read() as usize;
    Ok(report)
}

fn print_report(report: &DemuxReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            println!(
                "{}",
                summary_table([
                    ("selector", report.selector.to_string()),
                    ("messages read", report.messages_read.to_string()),
                    ("consumed", report.consumed.to_string()),
                    ("bytes extracted", report.bytes_extracted.to_string()),
                    ("forwarded", report.forwarded.len().to_string()),
                    ("violations", report.violations.len().to_string()),
                ])
            );
            if !report.forwarded.is_empty() {
                println!("{}", message_table(&report.forwarded));
            }
        }
        OutputFormat::Pretty => {
            println!(
                "{}: read={} consumed={} bytes={} forwarded={} violations={}",
                report.selector,
                report.messages_read,
                report.consumed,
                report.bytes_extracted,
                report.forwarded.len(),
                report.violations.len()
            );
            for violation in &report.violations {
                println!("#{} {}", violation.index, violation.error);
            }
        }
    }
}
