//! Output formatting

use clap::ValueEnum;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name from the config file
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    pub fn render<T: Serialize + Tabled>(&self, rows: Vec<T>) -> String {
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(&rows).unwrap_or_default(),
            OutputFormat::Yaml => serde_yaml::to_string(&rows).unwrap_or_default(),
            OutputFormat::Table => Table::new(rows).to_string(),
        }
    }

    pub fn print<T: Serialize + Tabled>(&self, rows: Vec<T>) {
        println!("{}", self.render(rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Tabled)]
    struct Row {
        #[tabled(rename = "Engineer")]
        name: String,
        points: u64,
    }

    fn rows() -> Vec<Row> {
        vec![Row { name: "Adela Parkson".into(), points: 300 }]
    }

    #[test]
    fn test_parse() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("YAML"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("csv"), None);
    }

    #[test]
    fn test_render() {
        let table = OutputFormat::Table.render(rows());
        assert!(table.contains("Engineer"));
        assert!(table.contains("Adela Parkson"));

        let json: serde_json::Value =
            serde_json::from_str(&OutputFormat::Json.render(rows())).unwrap();
        assert_eq!(json[0]["points"], 300);

        assert!(OutputFormat::Yaml.render(rows()).contains("name: Adela Parkson"));
    }
}
