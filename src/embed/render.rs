use crate::core::config::EmbedConfig;
use super::name::ArrayName;

const INDENT: &str = "    ";

/// Renders `bytes` as a C length constant followed by an array initializer.
pub fn render_array(name: &ArrayName, bytes: &[u8], config: &EmbedConfig) -> String {
    // "0xNN, " is six characters per byte
    let mut out = String::with_capacity(bytes.len() * 6 + 128);

    out.push_str(&format!("// Array length for {}\n", name));
    out.push_str(&format!("{} {} = {};\n\n", config.length_type(), name.length_name(), bytes.len()));
    out.push_str(&format!("{} {}[] = {{\n", config.element_type(), name));

    let body = match config.bytes_per_line() {
        Some(per_line) if !bytes.is_empty() => bytes
            .chunks(per_line)
            .map(hex_list)
            .collect::<Vec<_>>()
            .join(&format!(",\n{}", INDENT)),
        _ => hex_list(bytes),
    };
    out.push_str(INDENT);
    out.push_str(&body);
    out.push_str("\n};\n");
    out
}

fn hex_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("0x{:02x}", byte))
        .collect::<Vec<_>>()
        .join(", ")
}
