use crate::application::SnapshotObserver;
use crate::domain::Record;

/// Writes each confirmed snapshot to stdout.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self
    }

    fn format_records(records: &[Record]) -> String {
        if records.is_empty() {
            return "The repository list is empty.\n".to_string();
        }

        let mut output = String::new();
        for record in records {
            output.push_str(&format!("{}  [{}]\n", record.title, record.id));
            output.push_str(&format!("    {}\n", record.url));
            if !record.techs.is_empty() {
                output.push_str(&format!("    Techs: {}\n", record.techs.join(", ")));
            }
            let noun = if record.likes == 1 { "like" } else { "likes" };
            output.push_str(&format!("    {} {}\n", record.likes, noun));
            output.push('\n');
        }

        output
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotObserver for ConsoleRenderer {
    fn on_snapshot(&self, records: &[Record]) {
        print!("{}", Self::format_records(records));
    }
}
