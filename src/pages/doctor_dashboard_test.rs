use super::*;

#[test]
fn pending_error_message_for_forbidden() {
    assert_eq!(
        pending_error_message(&ApiError::Status(403)),
        "Accès refusé. Problème d'authentification du médecin."
    );
}

#[test]
fn pending_error_message_for_server_fault() {
    assert_eq!(
        pending_error_message(&ApiError::Status(500)),
        "Erreur serveur lors du chargement des demandes."
    );
}

#[test]
fn pending_error_message_falls_back_to_generic() {
    assert_eq!(
        pending_error_message(&ApiError::Status(404)),
        "Erreur lors du chargement des demandes en attente."
    );
    assert_eq!(
        pending_error_message(&ApiError::Network("offline".to_owned())),
        "Erreur lors du chargement des demandes en attente."
    );
}
