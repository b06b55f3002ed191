/// Capitalize the first letter of every space separated word and lowercase
/// the rest: `"jOHN doe"` becomes `"John Doe"`.
pub fn first_letter_uppercase(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn lowercase(value: &str) -> String {
    value.to_lowercase()
}
