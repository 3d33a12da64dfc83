/// 알 수 없는 코드에 쓰는 기본 배율.
pub const DEFAULT_LRA_MULTIPLIER: f64 = 6.0;

/// NEMA 코드 문자별 기동전류 배율.
const NEMA_MULTIPLIERS: &[(char, f64)] = &[
    ('B', 3.5),
    ('C', 4.0),
    ('D', 4.5),
    ('E', 4.5),
    ('F', 5.5),
    ('G', 6.5),
    ('H', 7.5),
    ('J', 8.0),
];

fn known_multiplier(code: &str) -> Option<f64> {
    let mut chars = code.trim().chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    NEMA_MULTIPLIERS
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, m)| *m)
}

/// 코드 문자의 배율. 대소문자를 구분하지 않으며 모르는 코드는 6.0으로 대체한다.
pub fn nema_multiplier(code: &str) -> f64 {
    known_multiplier(code).unwrap_or(DEFAULT_LRA_MULTIPLIER)
}

pub fn is_known_nema_code(code: &str) -> bool {
    known_multiplier(code).is_some()
}

/// 구속회전자전류(LRA)를 추정한다. 실패하지 않는다.
pub fn locked_rotor_estimate(current: f64, code: &str) -> f64 {
    current * nema_multiplier(code)
}
