use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use sctpstream_message::{is_webrtc, SctpMessage};
use serde::Serialize;

const PREVIEW_LIMIT: usize = 64;

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// One capture message as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct MessageOutput {
    pub index: usize,
    pub protocol: u32,
    pub protocol_name: &'static str,
    pub data_channel: bool,
    pub stream: u16,
    pub complete: bool,
    pub payload_size: usize,
    pub payload: String,
}

impl MessageOutput {
    pub fn new(index: usize, msg: &SctpMessage) -> Self {
        Self {
            index,
            protocol: msg.protocol_identifier,
            protocol_name: msg.protocol_name(),
            data_channel: is_webrtc(msg.protocol_identifier),
            stream: msg.stream_identifier,
            complete: msg.complete,
            payload_size: msg.payload.len(),
            payload: payload_preview(msg.payload.as_ref()),
        }
    }

    fn pretty(&self) -> String {
        format!(
            "#{} protocol={} ({}) stream={} complete={} size={} payload={}",
            self.index,
            self.protocol,
            self.protocol_name,
            self.stream,
            self.complete,
            self.payload_size,
            self.payload
        )
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_messages(messages: &[MessageOutput], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for msg in messages {
                print_json(msg);
            }
        }
        OutputFormat::Table => println!("{}", message_table(messages)),
        OutputFormat::Pretty => {
            for msg in messages {
                println!("{}", msg.pretty());
            }
        }
    }
}

pub fn message_table(messages: &[MessageOutput]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "#", "PROTOCOL", "STREAM", "COMPLETE", "SIZE", "PAYLOAD",
    ]);
    for msg in messages {
        table.add_row(vec![
            msg.index.to_string(),
            format!("{} ({})", msg.protocol_name, msg.protocol),
            msg.stream.to_string(),
            msg.complete.to_string(),
            msg.payload_size.to_string(),
            msg.payload.clone(),
        ]);
    }
    table
}

/// Two-column key/value table.
pub fn summary_table<'a>(rows: impl IntoIterator<Item = (&'a str, String)>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["FIELD", "VALUE"]);
    for (key, value) in rows {
        table.add_row(vec![key.to_string(), value]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) if text.chars().count() <= PREVIEW_LIMIT => text.to_string(),
        Ok(text) => {
            let head: String = text.chars().take(PREVIEW_LIMIT).collect();
            format!("{head}...")
        }
        Err(_) => format!("<binary {} bytes>", payload.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_text_and_binary() {
        assert_eq!(payload_preview(b"hello"), "hello");
        assert_eq!(payload_preview(&[0xFF, 0xFE]), "<binary 2 bytes>");
    }

    #[test]
    fn preview_truncates_long_text() {
        let long = "a".repeat(PREVIEW_LIMIT + 10);
        let preview = payload_preview(long.as_bytes());
        assert_eq!(preview.len(), PREVIEW_LIMIT + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn message_output_serializes_fields() {
        let out = MessageOutput::new(4, &SctpMessage::partial(46, 3, b"cer".to_vec()));
        let json = serde_json::to_value(&out).unwrap();

        assert_eq!(json["index"], 4);
        assert_eq!(json["protocol_name"], "DIAMETER");
        assert_eq!(json["data_channel"], false);
        assert_eq!(json["stream"], 3);
        assert_eq!(json["complete"], false);
        assert_eq!(json["payload"], "cer");
    }

    #[test]
    fn webrtc_messages_are_marked_as_data_channel() {
        let out = MessageOutput::new(0, &SctpMessage::new(51, 1, b"hi".to_vec()));
        assert!(out.data_channel);
        assert_eq!(out.protocol_name, "WEBRTC_STRING");
    }

    #[test]
    fn table_lists_every_message() {
        let rows = vec![
            MessageOutput::new(0, &SctpMessage::new(37, 2, b"one".to_vec())),
            MessageOutput::new(1, &SctpMessage::new(37, 5, b"two".to_vec())),
        ];
        let rendered = message_table(&rows).to_string();
        assert!(rendered.contains("one"));
        assert!(rendered.contains("two"));
        assert!(rendered.contains("OTHER (37)"));
    }
}
