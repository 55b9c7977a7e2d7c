use duolocale::{InMemoryPage, LocaleApplier, Translations};
use duolocale_host::{FileStore, SystemLanguage};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

const ES_JSON: &str = include_str!("../i18n/es.json");
const EN_JSON: &str = include_str!("../i18n/en.json");

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let page = build_page();
    let translations = Translations::from_json(ES_JSON, EN_JSON).unwrap();
    let store = FileStore::in_config_dir("duolocale-portfolio").unwrap();
    tracing::info!("Preferences at {}", store.path().display());

    let mut applier = LocaleApplier::builder()
        .translations(translations)
        .view(Box::new(page.clone()))
        .preferences(Box::new(store))
        .environment(Box::new(SystemLanguage::new()))
        .build();

    let locale = applier.effective_locale();
    println!("Effective locale: {} ({})", locale, locale.display_name());
    applier.apply(locale);
    print_page(&page);

    let toggled = applier.toggle();
    println!("Toggled to: {} ({})", toggled, toggled.display_name());
    print_page(&page);
}

fn build_page() -> InMemoryPage {
    let page = InMemoryPage::new();
    page.push_tagged("nav.inicio", "Inicio");
    page.push_tagged("nav.proyectos", "Proyectos");
    page.push_tagged("nav.contacto", "Contacto");
    page.push_tagged("hero.saludo", "Hola, soy Ana.");
    page.push_tagged("hero.rol", "Desarrolladora web");
    // Only the Spanish dictionary covers this one, so it stays Spanish
    // under the English locale.
    page.push_tagged("footer.nota", "Hecho con Rust");
    page.push_text("ana@example.com");
    page
}

fn print_page(page: &InMemoryPage) {
    let tag = page.language_tag().unwrap_or_else(|| "?".to_owned());
    println!("--- page [{tag}] ---");
    for line in page.texts() {
        println!("  {line}");
    }
    println!();
}
