use super::*;

// =============================================================
// form validation
// =============================================================

#[test]
fn validate_booking_accepts_future_date() {
    assert_eq!(
        validate_booking("3", "2025-05-01", "Consultation", "2025-03-15"),
        Ok(3)
    );
}

#[test]
fn validate_booking_accepts_today() {
    assert_eq!(
        validate_booking("3", "2025-03-15", "Consultation", "2025-03-15"),
        Ok(3)
    );
}

#[test]
fn validate_booking_rejects_past_date_before_any_network_call() {
    assert_eq!(
        validate_booking("3", "2025-03-14", "Consultation", "2025-03-15"),
        Err(PAST_DATE_MESSAGE.to_owned())
    );
}

#[test]
fn validate_booking_requires_a_doctor() {
    assert_eq!(
        validate_booking("", "2025-05-01", "Consultation", "2025-03-15"),
        Err(REQUIRED_FIELDS_MESSAGE.to_owned())
    );
}

#[test]
fn validate_booking_requires_date_and_reason() {
    assert_eq!(
        validate_booking("3", "", "Consultation", "2025-03-15"),
        Err(REQUIRED_FIELDS_MESSAGE.to_owned())
    );
    assert_eq!(
        validate_booking("3", "2025-05-01", "   ", "2025-03-15"),
        Err(REQUIRED_FIELDS_MESSAGE.to_owned())
    );
}

// =============================================================
// messages
// =============================================================

#[test]
fn booking_success_message_names_doctor_and_formatted_date() {
    let message = booking_success_message(Some("Dr. Benali"), "2025-05-01");
    assert!(message.contains("Dr. Benali"));
    assert!(message.contains("01/05/2025"));
}

#[test]
fn booking_success_message_falls_back_to_generic_doctor() {
    let message = booking_success_message(None, "2025-05-01");
    assert!(message.contains("le médecin"));
}

#[test]
fn booking_error_message_per_status() {
    assert_eq!(
        booking_error_message(&ApiError::Status(400)),
        "Données invalides. Veuillez vérifier vos informations."
    );
    assert_eq!(
        booking_error_message(&ApiError::Status(401)),
        "Vous devez être connecté pour réserver un rendez-vous."
    );
    assert_eq!(
        booking_error_message(&ApiError::Status(404)),
        "Médecin introuvable. Veuillez sélectionner un autre médecin."
    );
    assert_eq!(
        booking_error_message(&ApiError::Status(500)),
        "Erreur lors de la réservation. Veuillez réessayer."
    );
}

#[test]
fn booking_error_message_for_network_failure() {
    assert_eq!(
        booking_error_message(&ApiError::Network("offline".to_owned())),
        "Impossible de se connecter au serveur. Veuillez vérifier votre connexion réseau."
    );
}

#[test]
fn doctors_error_message_distinguishes_network_failure() {
    assert_eq!(
        doctors_error_message(&ApiError::Network("offline".to_owned())),
        "Impossible de se connecter au serveur. Veuillez vérifier votre connexion réseau."
    );
    assert_eq!(
        doctors_error_message(&ApiError::Status(500)),
        "Erreur lors du chargement des médecins."
    );
}
