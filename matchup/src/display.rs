//! Text formatting shared by the reference views

/// Title-case a hyphenated API name (`"thunder-punch"` -> `"Thunder Punch"`)
pub fn format_name(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Zero-padded pokedex number (`25` -> `"#025"`)
pub fn dex_number(id: u32) -> String {
    format!("#{id:03}")
}
