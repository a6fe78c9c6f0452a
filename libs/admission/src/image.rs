//! Image digest grammar: `<algorithm>:<lowercase hex>`.

use berth_job::ContainerImage;

use crate::violations::{codes, ViolationMap};

fn is_lower_hex(c: char) -> bool {
    c.is_ascii_digit() || ('a'..='f').contains(&c)
}

fn digest_is_valid(digest: &str, algorithms: &[String]) -> bool {
    let Some((algorithm, hex)) = digest.split_once(':') else {
        return false;
    };

    algorithms.iter().any(|a| a == algorithm) && !hex.is_empty() && hex.chars().all(is_lower_hex)
}

pub(crate) fn check_image(image: &ContainerImage, algorithms: &[String]) -> ViolationMap {
    let mut violations = ViolationMap::new();

    if let Some(digest) = image.digest.as_deref() {
        if !digest_is_valid(digest, algorithms) {
            violations.insert(
                codes::INVALID_DIGEST,
                format!(
                    "Malformed image digest '{}' (expected <algorithm>:<hex> with algorithm one of [{}])",
                    digest,
                    algorithms.join(", ")
                ),
            );
        }
    }

    violations
}
