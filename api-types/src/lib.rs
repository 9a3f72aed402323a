//! GraphQL type definitions for the SPARCS gateway API
//!
//! This crate contains pure GraphQL type definitions that can be reused
//! by clients without depending on the full API server implementation.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A book held in the local collection
///
/// Both fields are nullable: the add-book mutation performs no argument
/// validation, so absent arguments are stored and returned as null.
#[derive(SimpleObject, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Book {
    /// Book title as supplied by the caller
    pub title: Option<String>,
    /// Author name as supplied by the caller
    pub author: Option<String>,
}

/// Wall-clock echo computed fresh per request
///
/// The two timestamps are read independently and may differ by a few
/// milliseconds within one response.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Date")]
pub struct DateEcho {
    /// Current wall-clock time as a human-readable string
    pub now: String,
    /// Greeting embedding a second wall-clock read after a fixed prefix
    pub hello: String,
}

/// A single health-discharge record from the NY SPARCS dataset
///
/// The remote dataset is not schema-pinned: every field is a nullable
/// string and presence is never enforced at the wire level. Field names
/// keep the dataset's snake_case spelling on the wire.
#[derive(SimpleObject, Clone, Debug, Default, PartialEq, Eq)]
#[graphql(name = "Record", rename_fields = "snake_case")]
pub struct HealthRecord {
    pub abortion_edit_indicator: Option<String>,
    pub age_group: Option<String>,
    pub apr_drg_code: Option<String>,
    pub apr_drg_description: Option<String>,
    pub apr_mdc_code: Option<String>,
    pub apr_mdc_description: Option<String>,
    pub apr_medical_surgical_description: Option<String>,
    pub apr_risk_of_mortality: Option<String>,
    pub apr_severity_of_illness_code: Option<String>,
    pub apr_severity_of_illness_description: Option<String>,
    pub attending_provider_license_number: Option<String>,
    pub birth_weight: Option<String>,
    pub ccs_diagnosis_code: Option<String>,
    pub ccs_diagnosis_description: Option<String>,
    pub ccs_procedure_code: Option<String>,
    pub ccs_procedure_description: Option<String>,
    pub discharge_year: Option<String>,
    pub emergency_department_indicator: Option<String>,
    pub ethnicity: Option<String>,
    pub facility_id: Option<String>,
    pub facility_name: Option<String>,
    pub gender: Option<String>,
    pub health_service_area: Option<String>,
    pub hospital_county: Option<String>,
    pub length_of_stay: Option<String>,
    pub operating_certificate_number: Option<String>,
    pub patient_disposition: Option<String>,
    pub payment_typology_1: Option<String>,
    pub payment_typology_2: Option<String>,
    pub race: Option<String>,
    pub total_charges: Option<String>,
    pub total_costs: Option<String>,
    pub type_of_admission: Option<String>,
    pub zip_code_3_digits: Option<String>,
}

/// Copy a declared string field out of a raw remote object
///
/// Non-string values are treated the same as absent ones.
fn field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_owned)
}

impl HealthRecord {
    /// Shape an open-ended remote JSON object into the declared record type
    ///
    /// This is the explicit lax-mapping step of the record proxy: keys the
    /// schema does not declare are dropped, and declared keys absent from
    /// the payload resolve to null (schema-on-read).
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            abortion_edit_indicator: field(fields, "abortion_edit_indicator"),
            age_group: field(fields, "age_group"),
            apr_drg_code: field(fields, "apr_drg_code"),
            apr_drg_description: field(fields, "apr_drg_description"),
            apr_mdc_code: field(fields, "apr_mdc_code"),
            apr_mdc_description: field(fields, "apr_mdc_description"),
            apr_medical_surgical_description: field(fields, "apr_medical_surgical_description"),
            apr_risk_of_mortality: field(fields, "apr_risk_of_mortality"),
            apr_severity_of_illness_code: field(fields, "apr_severity_of_illness_code"),
            apr_severity_of_illness_description: field(fields, "apr_severity_of_illness_description"),
            attending_provider_license_number: field(fields, "attending_provider_license_number"),
            birth_weight: field(fields, "birth_weight"),
            ccs_diagnosis_code: field(fields, "ccs_diagnosis_code"),
            ccs_diagnosis_description: field(fields, "ccs_diagnosis_description"),
            ccs_procedure_code: field(fields, "ccs_procedure_code"),
            ccs_procedure_description: field(fields, "ccs_procedure_description"),
            discharge_year: field(fields, "discharge_year"),
            emergency_department_indicator: field(fields, "emergency_department_indicator"),
            ethnicity: field(fields, "ethnicity"),
            facility_id: field(fields, "facility_id"),
            facility_name: field(fields, "facility_name"),
            gender: field(fields, "gender"),
            health_service_area: field(fields, "health_service_area"),
            hospital_county: field(fields, "hospital_county"),
            length_of_stay: field(fields, "length_of_stay"),
            operating_certificate_number: field(fields, "operating_certificate_number"),
            patient_disposition: field(fields, "patient_disposition"),
            payment_typology_1: field(fields, "payment_typology_1"),
            payment_typology_2: field(fields, "payment_typology_2"),
            race: field(fields, "race"),
            total_charges: field(fields, "total_charges"),
            total_costs: field(fields, "total_costs"),
            type_of_admission: field(fields, "type_of_admission"),
            zip_code_3_digits: field(fields, "zip_code_3_digits"),
        }
    }
}
