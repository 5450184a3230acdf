//! License bodies.

use crate::LicenseKind;

const LICENSES: &[(LicenseKind, &str)] = &[
    (LicenseKind::Mit, include_str!("templates/licenses/MIT")),
    (LicenseKind::Apache2, include_str!("templates/licenses/Apache-2.0")),
    (LicenseKind::Gpl3, include_str!("templates/licenses/GPL-3.0")),
    (LicenseKind::Proprietary, include_str!("templates/licenses/Proprietary")),
];

/// Returns the license template for `kind`, or `None` when no body is
/// known, in which case no LICENSE file is written.
#[must_use]
pub fn license_template(kind: LicenseKind) -> Option<&'static str> {
    LICENSES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|&(_, body)| body)
}
