//! Static read-only staff directory.
//!
//! Reference data consumed by the API layer; the task core never validates
//! staff ids against it.

use std::collections::HashMap;

use crate::model::Staff;

pub struct StaffDirectory {
    members: HashMap<String, Staff>,
}

impl StaffDirectory {
    /// Directory seeded with the built-in sample staff members.
    pub fn with_sample_data() -> Self {
        let seed = [
            Staff {
                id: "staff1".to_string(),
                name: "John Doe".to_string(),
                email: "john.doe@company.com".to_string(),
                department: "Sales".to_string(),
                role: "Sales Representative".to_string(),
            },
            Staff {
                id: "staff2".to_string(),
                name: "Jane Smith".to_string(),
                email: "jane.smith@company.com".to_string(),
                department: "Operations".to_string(),
                role: "Operations Manager".to_string(),
            },
            Staff {
                id: "staff3".to_string(),
                name: "Mike Wilson".to_string(),
                email: "mike.wilson@company.com".to_string(),
                department: "Support".to_string(),
                role: "Customer Support Specialist".to_string(),
            },
        ];
        Self {
            members: seed.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Staff> {
        self.members.get(id)
    }

    /// All members, sorted by id for deterministic output.
    pub fn list(&self) -> Vec<Staff> {
        let mut members: Vec<Staff> = self.members.values().cloned().collect();
        members.sort_by(|a, b| a.id.cmp(&b.id));
        members
    }
}
