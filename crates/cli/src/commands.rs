use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert raw form values into a selection
    Convert {
        #[arg(long, help = "Form JSON file path, or - for stdin")]
        input: String,

        #[arg(
            long,
            help = "If specified, writes the selection to this file instead of stdout"
        )]
        output: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(u64).range(1..), help = "Maximum filter nesting depth")]
        max_depth: Option<u64>,

        #[arg(long, help = "Print the selection on a single line")]
        compact: bool,
    },
    /// Check the filter structure of an already built selection
    Check {
        #[arg(long, help = "Selection JSON file path, or - for stdin")]
        input: String,

        #[arg(long, value_parser = clap::value_parser!(u64).range(1..), help = "Maximum filter nesting depth")]
        max_depth: Option<u64>,
    },
    /// Convert form values and print the SQL the selection corresponds to
    Sql {
        #[arg(long, help = "Form JSON file path, or - for stdin")]
        input: String,

        /// SQL dialect: "pg" or "mysql"
        #[arg(long, default_value = "pg")]
        dialect: String,

        #[arg(long, value_parser = clap::value_parser!(u64).range(1..), help = "Maximum filter nesting depth")]
        max_depth: Option<u64>,
    },
}
