// ============================================================================
// ArigoPay - Tableaux de bord Investissement et Accueil
// ============================================================================
// Programme TUI avec deux écrans indépendants :
// - Investment Center : portefeuille, produits, historique (onglets)
// - Dashboard : solde masquable, taux, transactions, virement
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : render → input/update, sur un seul thread
// 3. Trait objects : &dyn DataProvider choisi au démarrage
// ============================================================================

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use arigopay::app::App;
use arigopay::config::AppConfig;
use arigopay::provider::{load_home, load_investment, DataProvider, SampleProvider, SnapshotProvider};
use arigopay::ui::{handle_event, render, EventHandler};

// ============================================================================
// Initialisation du logging
// ============================================================================
// Les println! ne fonctionnent pas une fois le TUI lancé : on log vers un
// fichier, avec rotation quotidienne.
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// # Utilisation
/// ```bash
/// # Voir les logs en temps réel
/// tail -f ~/.local/share/arigopay/logs/arigopay.log
///
/// # Contrôler le niveau de log
/// RUST_LOG=debug cargo run
/// RUST_LOG=arigopay=trace cargo run
/// ```
fn init_logging(config: &AppConfig) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = config.log_dir.clone();

    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "arigopay.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_line_number(true),
        )
        .with(
            // RUST_LOG prioritaire, sinon debug pour arigopay et info pour le reste
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arigopay=debug,info".into()),
        )
        .try_init()
        .context("Subscriber tracing déjà installé")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    let config = AppConfig::from_env().context("Configuration invalide")?;

    // Si le logging échoue, on prévient et on continue sans
    init_logging(&config).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(?config, "ArigoPay starting up");

    // Chargement unique des enregistrements : ils ne changent plus ensuite
    let provider = open_provider(&config)?;
    let investment = load_investment(&*provider)?;
    let home = load_home(&*provider)?;

    let mut app = App::with_screen(investment, home, config.start_screen);

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    let events = EventHandler::new();

    info!(screen = ?app.current_screen, "Starting event loop");
    let result = run(&mut terminal, &mut app, &events);

    // Le résultat de la boucle est loggé avant la restauration,
    // qui peut elle-même échouer
    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    let restored = restore_terminal(&mut terminal);
    if let Err(e) = &restored {
        error!(error = ?e, "Failed to restore terminal");
    }

    exit_status(result, restored)
}

/// Combine l'issue de la boucle et celle de la restauration
///
/// L'erreur de la boucle reste prioritaire : c'est elle qui explique
/// pourquoi on sort.
fn exit_status(result: Result<()>, restored: Result<()>) -> Result<()> {
    result.and(restored)
}

/// Choisit la source des données selon la configuration
///
/// CONCEPT RUST : Box<dyn Trait>
/// - Le type concret n'est connu qu'à l'exécution
/// - Le reste du programme ne voit que DataProvider
fn open_provider(config: &AppConfig) -> Result<Box<dyn DataProvider>> {
    match &config.snapshot {
        Some(path) => {
            info!(path = %path.display(), "Using JSON snapshot");
            Ok(Box::new(SnapshotProvider::from_file(path)?))
        }
        None => {
            info!("Using built-in sample data");
            Ok(Box::new(SampleProvider::new()))
        }
    }
}

// ============================================================================
// Event Loop
// ============================================================================

/// Boucle principale : dessine, lit une touche, met à jour
///
/// Tout se passe sur ce thread : un changement d'état est toujours
/// visible au dessin suivant.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while app.is_running() {
        // 1. RENDER
        terminal.draw(|frame| render(frame, app))?;

        // 2. INPUT + UPDATE
        let event = events.next().context("Lecture des événements clavier")?;
        handle_event(app, event);
    }

    Ok(())
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI (raw mode + alternate screen)
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Activation du raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Entrée dans l'alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Création du terminal")
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let err = exit_status(Err(anyhow!("boucle")), Err(anyhow!("restauration"))).unwrap_err();
        assert_eq!(err.to_string(), "boucle");
    }

    #[test]
    fn test_restore_error_reported_after_clean_loop() {
        let err = exit_status(Ok(()), Err(anyhow!("restauration"))).unwrap_err();
        assert_eq!(err.to_string(), "restauration");
        assert!(exit_status(Ok(()), Ok(())).is_ok());
    }
}
