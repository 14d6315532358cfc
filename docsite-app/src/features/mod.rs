//! Page behaviors.
//!
//! Each installer wires one behavior to the DOM. Installers are independent:
//! one failing is logged and the rest still run.

pub mod a11y;
pub mod copy;
pub mod counter;
pub mod interaction;
pub mod lifecycle;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod search;
pub mod theme;
pub mod toast;

use crate::dom::AppResult;
use crate::site::SiteHandle;

type Installer = fn(&SiteHandle) -> AppResult<()>;

/// Installers in mount order.
const FEATURES: &[(&str, Installer)] = &[
    ("error-reporting", lifecycle::install_error_reporting),
    ("navigation", nav::install),
    ("anchors", nav::install_anchors),
    ("dropdowns", nav::install_dropdowns),
    ("scroll", scroll::install),
    ("reveal", reveal::install),
    ("metric-cards", reveal::install_metric_cards),
    ("lazy-images", reveal::install_lazy_images),
    ("counters", counter::install),
    ("ripple", interaction::install_ripple),
    ("tilt", interaction::install_tilt),
    ("floating-cards", interaction::install_floating),
    ("copy", copy::install),
    ("contact-form", toast::install_contact_form),
    ("search", search::install),
    ("theme", theme::install),
    ("accessibility", a11y::install),
    ("lifecycle", lifecycle::install),
];

/// Install every behavior. Returns how many failed.
pub fn install_all(site: &SiteHandle) -> usize {
    let mut failed = 0;
    for (name, install) in FEATURES {
        match install(site) {
            Ok(()) => tracing::debug!("Installed {name}"),
            Err(e) => {
                failed += 1;
                tracing::warn!("Failed to install {name}: {e}");
            }
        }
    }
    failed
}
