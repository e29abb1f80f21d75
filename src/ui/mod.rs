// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;     // Gestion des événements clavier
pub mod dashboard;  // Routage entre écrans, footer, helpers communs
pub mod investment; // Écran "Investment Center"
pub mod home;       // Écran "Dashboard" (compte courant)
pub mod chart;      // Graphiques allocation et performance

// Re-exports pour simplifier les imports
pub use events::{handle_event, Event, EventHandler};
pub use dashboard::render;
