// ============================================================================
// ArigoPay - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod config;   // Configuration (variables d'environnement)
pub mod models;   // Structures de données
pub mod provider; // Sources des enregistrements affichés
pub mod state;    // État local des vues (onglet, solde)
pub mod app;      // État de l'application
pub mod ui;       // Interface utilisateur
