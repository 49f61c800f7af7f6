//! End-to-end demo: search a catalog, curate a selection, inspect the graph

use costar::{Catalog, Session, Viewport};

fn main() {
    println!("Costar Graph Engine v{} demo", costar::version());
    println!("==========================================");
    println!();

    let catalog = Catalog::load_from_file("data/movies.json").expect("demo catalog should load");
    let mut session = Session::new(catalog);

    // Search the catalog the way the UI's query box would
    session.set_query("the");
    println!("Search \"the\" → {} candidates:", session.results().len());
    for movie in session.results() {
        println!("  {} ({} billed)", movie.title, movie.cast_size());
    }
    println!();

    // Select a couple of movies
    for title in ["Aladdin", "The Lion King", "Hercules"] {
        if let Some(movie) = session.catalog().get(title) {
            let movie = movie.clone();
            session.add_movie(movie);
            println!("✓ Selected {title}");
        }
    }
    println!();

    let graph = session.graph();
    println!("Derived graph: {} actors, {} co-star links", graph.node_count(), graph.link_count());
    for (position, title) in session.selection().titles().iter().enumerate() {
        let count = graph.links.iter().filter(|l| l.label == *title).count();
        println!("  [{position}] {title}: {count} links");
    }
    println!();

    // Focus a node; only its links keep their labels
    session.set_viewport(Viewport::new(600, 800));
    session.set_focus(Some("Robin Williams".to_string()));
    let visible: Vec<_> = session
        .graph()
        .links
        .iter()
        .filter(|l| session.config().label_visible(l))
        .collect();
    println!("Focused on Robin Williams → {} visible labels:", visible.len());
    for link in visible {
        println!("  {} → {} [{}]", link.source, link.target, link.label);
    }
    println!();

    let config = serde_json::to_string_pretty(session.config()).unwrap();
    println!("Render config:\n{config}");
}
