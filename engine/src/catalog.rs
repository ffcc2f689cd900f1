//! The catalog shipped with the binary.

use featurecards_types::{CatalogError, FeatureCatalog};

/// Categories in display order.
pub const BUILTIN_CATALOG: &[(&str, &[&str])] = &[
    (
        "Patient Management",
        &[
            "Add patients",
            "Edit patients",
            "Delete patients",
            "Track medical history / patient records",
            "Edit medical history",
            "Delete medical history",
        ],
    ),
    (
        "Staff Schedule Management",
        &[
            "Manage own schedule",
            "Manage staff schedule",
            "Schedule an appointment",
            "Schedule an appointment for staff",
            "View personal availability",
            "See staff availability",
            "Staff vacation approval",
            "Receive reminders",
        ],
    ),
    (
        "Financial management",
        &[
            "Generate and manage invoices, bills and receipts",
            "Track payments",
            "Generate financial reports",
            "Manage staff extra work",
            "Assign staff payments",
        ],
    ),
    (
        "Communication with Patients",
        &[
            "Communicate online with patients via a third party system",
            "Send test results and follow-up instructions to patients (e-mail)",
        ],
    ),
    (
        "Inventory management",
        &["Track medical supplies and medication stock levels"],
    ),
    (
        "Facility management",
        &[
            "See room allocations",
            "Schedule maintenance (cleaning)",
            "Control room booking",
        ],
    ),
];

pub fn builtin_catalog() -> Result<FeatureCatalog, CatalogError> {
    FeatureCatalog::from_table(BUILTIN_CATALOG)
}
