// Only the character references that show up in inflection tables
// Unknown references are kept as they are
pub fn decode_html_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_owned();
    }

    let mut ret = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(start) = rest.find('&') {
        ret.push_str(&rest[..start]);
        rest = &rest[start..];

        // references are at most 10 bytes up to the ';'
        let decoded = rest
            .bytes()
            .take(11)
            .position(|b| b == b';')
            .filter(|&end| 1 < end)
            .and_then(|end| decode_entity(&rest[1..end]).map(|c| (end, c)));

        match decoded {
            Some((end, c)) => {
                ret.push(c);
                rest = &rest[(end + 1)..];
            }
            None => {
                ret.push('&');
                rest = &rest[1..];
            }
        }
    }
    ret.push_str(rest);

    ret
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
