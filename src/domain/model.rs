use serde::{Deserialize, Serialize};
use std::fmt;

/// Experience tier. Selects both the tax rate and the developer variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Experience {
    Junior,
    Mid,
    Senior,
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Experience::Junior => "JUNIOR",
            Experience::Mid => "MID",
            Experience::Senior => "SENIOR",
        };
        f.write_str(tag)
    }
}

/// Fields shared by every developer variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperProfile {
    pub id: i32,
    pub name: String,
    pub net_salary: f64,
}

/// A stored developer record. The variant is the experience tier and is fixed
/// for the life of the record; an update replaces the whole value.
///
/// Serialized as `{"experience":"JUNIOR","id":1,"name":"Ada","netSalary":850.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "experience", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Developer {
    Junior(DeveloperProfile),
    Mid(DeveloperProfile),
    Senior(DeveloperProfile),
}

impl Developer {
    pub fn new(experience: Experience, id: i32, name: String, net_salary: f64) -> Self {
        let profile = DeveloperProfile {
            id,
            name,
            net_salary,
        };
        match experience {
            Experience::Junior => Developer::Junior(profile),
            Experience::Mid => Developer::Mid(profile),
            Experience::Senior => Developer::Senior(profile),
        }
    }

    pub fn experience(&self) -> Experience {
        match self {
            Developer::Junior(_) => Experience::Junior,
            Developer::Mid(_) => Experience::Mid,
            Developer::Senior(_) => Experience::Senior,
        }
    }

    pub fn profile(&self) -> &DeveloperProfile {
        match self {
            Developer::Junior(p) | Developer::Mid(p) | Developer::Senior(p) => p,
        }
    }

    pub fn id(&self) -> i32 {
        self.profile().id
    }

    pub fn name(&self) -> &str {
        &self.profile().name
    }

    pub fn net_salary(&self) -> f64 {
        self.profile().net_salary
    }
}

/// Body of a create or update call. Every field is optional at the wire level
/// so that missing and null values surface as validation errors rather than
/// parse failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperRequest {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "salary", alias = "grossSalary")]
    pub gross_salary: Option<f64>,
    #[serde(default)]
    pub experience: Option<Experience>,
}

impl DeveloperRequest {
    pub fn new(id: Option<i32>, name: &str, gross_salary: f64, experience: Experience) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            gross_salary: Some(gross_salary),
            experience: Some(experience),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_developer: Developer,
}

impl DeleteResponse {
    pub fn deleted(developer: Developer) -> Self {
        Self {
            message: "Deleted".to_string(),
            deleted_developer: developer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_developer_wire_format() {
        let dev = Developer::new(Experience::Junior, 1, "Ada".to_string(), 850.0);
        let value = serde_json::to_value(&dev).unwrap();
        assert_eq!(
            value,
            json!({"experience": "JUNIOR", "id": 1, "name": "Ada", "netSalary": 850.0})
        );

        let parsed: Developer = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, dev);
        assert_eq!(parsed.experience(), Experience::Junior);
    }

    #[test]
    fn test_variant_follows_experience() {
        for tier in [Experience::Junior, Experience::Mid, Experience::Senior] {
            let dev = Developer::new(tier, 3, "Grace".to_string(), 100.0);
            assert_eq!(dev.experience(), tier);
            assert_eq!(dev.id(), 3);
            assert_eq!(dev.name(), "Grace");
        }
    }

    #[test]
    fn test_request_accepts_null_and_missing_fields() {
        let req: DeveloperRequest =
            serde_json::from_value(json!({"name": null, "salary": 1000.0})).unwrap();
        assert_eq!(req.id, None);
        assert_eq!(req.name, None);
        assert_eq!(req.gross_salary, Some(1000.0));
        assert_eq!(req.experience, None);
    }

    #[test]
    fn test_request_gross_salary_alias() {
        let req: DeveloperRequest = serde_json::from_value(json!({
            "id": 2,
            "name": "Linus",
            "grossSalary": 2000.0,
            "experience": "MID"
        }))
        .unwrap();
        assert_eq!(req.gross_salary, Some(2000.0));
        assert_eq!(req.experience, Some(Experience::Mid));
    }

    #[test]
    fn test_delete_response_shape() {
        let dev = Developer::new(Experience::Senior, 9, "Ken".to_string(), 650.0);
        let value = serde_json::to_value(DeleteResponse::deleted(dev)).unwrap();
        assert_eq!(value["message"], "Deleted");
        assert_eq!(value["deletedDeveloper"]["id"], 9);
        assert_eq!(value["deletedDeveloper"]["experience"], "SENIOR");
    }
}
