//! Punycode (RFC 3492) for internationalized domain names.

const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 128;
const ACE_PREFIX: &str = "xn--";

/// Encodes every non-ASCII label of the domain to its "xn--" form. ASCII labels are left alone.
pub fn encode_domain(domain: &str) -> String {
    domain.split('.')
        .map(|label| {
            if label.is_ascii() {
                return label.to_string();
            }
            match encode(label) {
                Some(encoded) => format!("{}{}", ACE_PREFIX, encoded),
                None => label.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(".")
}

/// Decodes every "xn--" label of the domain. Returns None if any of them is not valid punycode.
pub fn decode_domain(domain: &str) -> Option<String> {
    let labels = domain.split('.')
        .map(|label| {
            match label.get(..ACE_PREFIX.len()) {
                Some(prefix) if prefix.eq_ignore_ascii_case(ACE_PREFIX) => decode(&label[ACE_PREFIX.len()..]),
                _ => Some(label.to_string())
            }
        })
        .collect::<Option<Vec<String>>>()?;
    Some(labels.join("."))
}

/// Encodes a single label. Returns None on arithmetic overflow.
pub fn encode(input: &str) -> Option<String> {
    let input: Vec<u32> = input.chars().map(|c| c as u32).collect();

    let mut output: String = input.iter()
        .filter(|&&c| c < INITIAL_N)
        .filter_map(|&c| char::from_u32(c))
        .collect();
    let basic_count = output.len() as u32;
    let mut handled = basic_count;
    if basic_count > 0 {
        output.push('-');
    }

    let mut n = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;

    while (handled as usize) < input.len() {
        let m = input.iter().copied().filter(|&c| c >= n).min()?;
        delta = delta.checked_add((m - n).checked_mul(handled + 1)?)?;
        n = m;

        for &c in &input {
            if c < n {
                delta = delta.checked_add(1)?;
            }
            if c == n {
                let mut q = delta;
                let mut k = BASE;
                loop {
                    let t = threshold(k, bias);
                    if q < t {
                        break;
                    }
                    output.push(encode_digit(t + (q - t) % (BASE - t)));
                    q = (q - t) / (BASE - t);
                    k += BASE;
                }
                output.push(encode_digit(q));
                bias = adapt(delta, handled + 1, handled == basic_count);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1)?;
        n = n.checked_add(1)?;
    }

    Some(output)
}

/// Decodes a single label, without its "xn--" prefix.
pub fn decode(input: &str) -> Option<String> {
    let (basic, extended) = match input.rfind('-') {
        Some(i) => (&input[..i], &input[i + 1..]),
        None => ("", input)
    };
    if !basic.is_ascii() {
        return None;
    }

    let mut output: Vec<char> = basic.chars().collect();
    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut digits = extended.bytes().peekable();

    while digits.peek().is_some() {
        let old_i = i;
        let mut weight: u32 = 1;
        let mut k = BASE;
        loop {
            let digit = decode_digit(digits.next()?)?;
            i = i.checked_add(digit.checked_mul(weight)?)?;
            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            weight = weight.checked_mul(BASE - t)?;
            k += BASE;
        }

        let length = output.len() as u32 + 1;
        bias = adapt(i - old_i, length, old_i == 0);
        n = n.checked_add(i / length)?;
        i %= length;
        output.insert(i as usize, char::from_u32(n)?);
        i += 1;
    }

    Some(output.into_iter().collect())
}

fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

fn adapt(delta: u32, points: u32, first: bool) -> u32 {
    let mut delta = if first { delta / DAMP } else { delta / 2 };
    delta += delta / points;

    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }

    k + (BASE - T_MIN + 1) * delta / (delta + SKEW)
}

fn encode_digit(digit: u32) -> char {
    let byte = if digit < 26 { b'a' + digit as u8 } else { b'0' + (digit - 26) as u8 };
    byte as char
}

fn decode_digit(byte: u8) -> Option<u32> {
    match byte {
        b'a'..=b'z' => Some((byte - b'a') as u32),
        b'A'..=b'Z' => Some((byte - b'A') as u32),
        b'0'..=b'9' => Some((byte - b'0') as u32 + 26),
        _ => None
    }
}
