//! Reply texts shown to users

use domain::DataFormat;

pub const START_MESSAGE: &str = "Welcome to Aeroexpress Schedule bot\n\
    The bot can process CSV and JSON files that contain information about \n\
    Aeroexpresses\n- filter\n- sort\n- export\n\
    Use /help command to learn how to use it";

pub const HELP_MESSAGE: &str = "/openfile - Open JSON or CSV file\n\
    /filter - Use filtering options\n\
    /sort - Use sorting options\n\
    /export - Export file\n\
    /view - View opened file";

pub const SEND_FILE: &str = "Send your file";
pub const NONE_OPEN: &str = "None files are open";
pub const FILE_LOADED: &str = "File was loaded. How do you want to proceed?";
pub const ALREADY_OPEN: &str =
    "[Unknown operation in this context]\nUse /openfile command to open a file";

pub const CHOOSE_FILTER_FIELD: &str = "Choose the field to filter by";
pub const ENTER_START_STATION: &str = "Enter the departure station";
pub const ENTER_END_STATION: &str = "Enter the arrival station";
pub const ENTER_BOTH_STATIONS: &str =
    "Enter the departure and arrival stations as value1&value2";
pub const CHOOSE_SORT_FIELD: &str = "Choose the field to sort by";
pub const CHOOSE_EXPORT_FORMAT: &str = "Choose the export format";

pub const UNDEFINED_FIELD: &str = "Undefined field";
pub const UNDEFINED_FORMAT: &str = "Undefined format";
pub const EXPORT_FAILED: &str = "Exporting wasn't completed due technical issues. Try again!";

/// Prefix every user-visible error
pub fn error(message: impl std::fmt::Display) -> String {
    format!("There's been an error: {message}")
}

/// Caption of an exported document
pub fn exporting(format: DataFormat) -> String {
    format!("Exporting to {}", format.extension())
}

/// Confirmation after a filter, followed by the preview
pub fn filtered(preview: &str) -> String {
    format!("Filtering is done.\n{preview}")
}

/// Confirmation after a sort, followed by the preview
pub fn sorted(preview: &str) -> String {
    format!("Sorting is done.\n{preview}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_command() {
        for command in ["/openfile", "/filter", "/sort", "/export", "/view"] {
            assert!(HELP_MESSAGE.contains(command));
        }
    }

    #[test]
    fn export_caption() {
        assert_eq!(exporting(DataFormat::Json), "Exporting to json");
        assert_eq!(exporting(DataFormat::Csv), "Exporting to csv");
    }

    #[test]
    fn error_prefix() {
        assert_eq!(error("boom"), "There's been an error: boom");
    }
}
