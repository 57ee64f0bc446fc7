#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Once;
use log::LevelFilter;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init()
            .ok();
    });
}

pub struct TestFixtures {
    pub temp_dir: TempDir,
}

impl TestFixtures {
    pub fn new() -> Self {
        setup();
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn create_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Writes a cities table with the GeoNames column layout, one row per `(name, population)`.
    pub fn create_gazetteer(&self, name: &str, cities: &[(&str, &str)]) -> PathBuf {
        let content: String = cities
            .iter()
            .enumerate()
            .map(|(id, (city, population))| gazetteer_row(id, city, population))
            .collect();
        self.create_file(name, content.as_bytes())
    }

    pub fn read_lines(&self, name: &str) -> Vec<String> {
        std::fs::read_to_string(self.path(name))
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }
}

impl Default for TestFixtures {
    fn default() -> Self {
        Self::new()
    }
}

pub const HEADER: &str = "city_name,population,country_code,timezone,latitude,longitude";

pub fn gazetteer_row(id: usize, city: &str, population: &str) -> String {
    let mut fields = vec![String::new(); 19];
    fields[0] = id.to_string();
    fields[1] = city.to_string();
    fields[2] = city.to_string();
    fields[4] = format!("{}.5", 10 + id);
    fields[5] = format!("-{}.25", 20 + id);
    fields[6] = "P".to_string();
    fields[7] = "PPL".to_string();
    fields[8] = "XX".to_string();
    fields[14] = population.to_string();
    fields[16] = "12".to_string();
    fields[17] = "Etc/UTC".to_string();
    fields[18] = "2024-03-01".to_string();
    format!("{}\n", fields.join("\t"))
}

/// Pulls `(declared length, bytes)` back out of a generated C array source.
pub fn parse_array_source(source: &str) -> (usize, Vec<u8>) {
    let length = source
        .lines()
        .find(|line| line.contains("_len = "))
        .and_then(|line| line.split("= ").nth(1))
        .map(|value| value.trim_end_matches(';').parse().unwrap())
        .expect("length declaration");

    let start = source.find('{').expect("array start") + 1;
    let end = source.rfind('}').expect("array end");
    let bytes = source[start..end]
        .split(',')
        .map(str::trim)
        .filter(|literal| !literal.is_empty())
        .map(|literal| {
            let hex = literal.strip_prefix("0x").expect("0x prefix");
            assert_eq!(hex.len(), 2, "two hex digits in {:?}", literal);
            u8::from_str_radix(hex, 16).unwrap()
        })
        .collect();

    (length, bytes)
}
