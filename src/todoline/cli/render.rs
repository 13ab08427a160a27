use colored::Colorize;
use todoline::api::{CmdMessage, MessageLevel};
use todoline::codec::LineCodec;
use todoline::error::TodoError;
use todoline::model::ToDoItem;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Raw stored lines, as `-list_all` shows them.
pub(super) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("TODO: {}", line);
    }
}

/// Decoded items in the order given, re-encoded with the active date format.
pub(super) fn print_items(codec: &LineCodec, items: &[ToDoItem]) {
    for item in items {
        println!("{}", codec.encode(item));
    }
}

pub(super) fn print_recoverable(err: &TodoError) {
    print_messages(&[CmdMessage::warning(err.to_string())]);
}
