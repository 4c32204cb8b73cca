use shared_utils::extractor::PatientParams;

#[test]
fn empty_query_yields_all_defaults() {
    let params = PatientParams::from_query("");

    assert!(params.symptoms.is_empty());
    assert!(params.allergies.is_empty());
    assert_eq!(params.age, 0);
    assert_eq!(params.latitude, 0.0);
    assert_eq!(params.longitude, 0.0);
}

#[test]
fn collects_repeated_list_params_in_order() {
    let params = PatientParams::from_query("symptoms=fever&symptoms=cough&allergies=nuts");

    assert_eq!(params.symptoms, vec!["fever", "cough"]);
    assert_eq!(params.allergies, vec!["nuts"]);
}

#[test]
fn accepts_bracketed_array_keys() {
    let params =
        PatientParams::from_query("symptoms%5B%5D=fever&symptoms%5B%5D=rash&allergies%5B%5D=dust");

    assert_eq!(params.symptoms, vec!["fever", "rash"]);
    assert_eq!(params.allergies, vec!["dust"]);
}

#[test]
fn parses_numeric_params() {
    let params = PatientParams::from_query("age=42&latitude=51.5074&longitude=-0.1278");

    assert_eq!(params.age, 42);
    assert_eq!(params.latitude, 51.5074);
    assert_eq!(params.longitude, -0.1278);
}

#[test]
fn non_numeric_input_coerces_to_defaults() {
    let params = PatientParams::from_query("age=abc&latitude=north&longitude=");

    assert_eq!(params.age, 0);
    assert_eq!(params.latitude, 0.0);
    assert_eq!(params.longitude, 0.0);
}

#[test]
fn negative_age_coerces_to_zero() {
    let params = PatientParams::from_query("age=-7");

    assert_eq!(params.age, 0);
}

#[test]
fn last_scalar_occurrence_wins() {
    let params = PatientParams::from_query("age=30&age=55&latitude=1.0&latitude=2.5");

    assert_eq!(params.age, 55);
    assert_eq!(params.latitude, 2.5);
}

#[test]
fn percent_decodes_values() {
    let params = PatientParams::from_query("symptoms=sore%20throat&symptoms=runny+nose");

    assert_eq!(params.symptoms, vec!["sore throat", "runny nose"]);
}

#[test]
fn unknown_keys_are_ignored() {
    let params = PatientParams::from_query("symptoms=fever&page=3&sort=distance");

    assert_eq!(params.symptoms, vec!["fever"]);
    assert_eq!(params.age, 0);
}
