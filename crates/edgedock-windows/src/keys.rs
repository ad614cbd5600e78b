/// Named keys, upper-cased, with their virtual key codes.
///
/// Names follow the accelerator conventions used by desktop shells
/// ("Space", "Plus", "PageUp", "Esc") plus a few common aliases.
const NAMED_KEYS: &[(&str, u32)] = &[
    ("ENTER", 0x0D),
    ("RETURN", 0x0D),
    ("TAB", 0x09),
    ("ESC", 0x1B),
    ("ESCAPE", 0x1B),
    ("SPACE", 0x20),
    ("BACKSPACE", 0x08),
    ("DELETE", 0x2E),
    ("DEL", 0x2E),
    ("INSERT", 0x2D),
    ("HOME", 0x24),
    ("END", 0x23),
    ("PAGEUP", 0x21),
    ("PAGEDOWN", 0x22),
    ("LEFT", 0x25),
    ("UP", 0x26),
    ("RIGHT", 0x27),
    ("DOWN", 0x28),
    ("PRINTSCREEN", 0x2C),
    ("MINUS", 0xBD),
    ("-", 0xBD),
    ("PLUS", 0xBB),
    ("=", 0xBB),
    (",", 0xBC),
    (".", 0xBE),
    ("/", 0xBF),
    (";", 0xBA),
    ("\\", 0xDC),
    ("[", 0xDB),
    ("]", 0xDD),
    ("'", 0xDE),
    ("`", 0xC0),
    ("NUM0", 0x60),
    ("NUM1", 0x61),
    ("NUM2", 0x62),
    ("NUM3", 0x63),
    ("NUM4", 0x64),
    ("NUM5", 0x65),
    ("NUM6", 0x66),
    ("NUM7", 0x67),
    ("NUM8", 0x68),
    ("NUM9", 0x69),
];

/// Converts a key name to a Windows virtual key code.
///
/// Letters, digits, F1–F24 and the names in [`NAMED_KEYS`] are
/// recognized, case-insensitively.
pub fn vk_from_name(name: &str) -> Option<u32> {
    let upper = name.trim().to_ascii_uppercase();

    if let [ch] = upper.as_bytes()
        && ch.is_ascii_alphanumeric()
    {
        return Some(u32::from(*ch));
    }

    if let Some(rest) = upper.strip_prefix('F')
        && let Ok(n) = rest.parse::<u32>()
        && (1..=24).contains(&n)
    {
        return Some(0x70 + n - 1); // VK_F1
    }

    NAMED_KEYS
        .iter()
        .find(|(key, _)| *key == upper)
        .map(|&(_, vk)| vk)
}
