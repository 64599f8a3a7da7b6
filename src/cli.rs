//! Command-line front end.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use property_search::detail::DetailView;
use property_search::favourites::{
    DragPayload, DropOutcome, DropZone, IgnoreReason, KeyValueStorage,
};
use property_search::search::FilterInputs;
use property_search::{App, FavouriteOutcome, Listing, ListingId};

/// Search a property catalog and keep a list of favourites.
#[derive(Parser, Debug)]
#[command(name = "property-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file [default: property-search.toml if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter the catalog and list matching properties
    Search(SearchArgs),

    /// Show one property
    Show { id: String },

    /// Manage favourites
    #[command(subcommand)]
    Favourites(FavouritesCommand),

    /// Print the drag payload for a property
    Drag {
        #[arg(value_enum)]
        intent: Intent,
        id: String,
    },

    /// Drop a drag payload on a zone
    Drop {
        #[arg(value_enum)]
        zone: Zone,
        payload: String,
    },
}

/// Filter flags are taken as typed; unusable values are ignored.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Property type, e.g. House or Flat ("any" for all)
    #[arg(long = "type", default_value = "")]
    pub property_type: String,
    #[arg(long, default_value = "")]
    pub min_price: String,
    #[arg(long, default_value = "")]
    pub max_price: String,
    #[arg(long, default_value = "")]
    pub min_beds: String,
    /// Postcode area prefix, e.g. BR5 or NW
    #[arg(long, default_value = "")]
    pub postcode: String,
    /// Added on or after, YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub from: String,
    /// Added on or before, YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub to: String,
}

impl SearchArgs {
    fn inputs(self) -> FilterInputs {
        FilterInputs {
            property_type: self.property_type,
            min_price: self.min_price,
            max_price: self.max_price,
            min_beds: self.min_beds,
            postcode_area: self.postcode,
            date_from: self.from,
            date_to: self.to,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum FavouritesCommand {
    /// List saved properties
    List,
    /// Save a property
    Add { id: String },
    /// Remove a saved property
    Remove { id: String },
    /// Remove all saved properties
    Clear,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Intent {
    Add,
    Remove,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Zone {
    Favourites,
    Results,
}

impl From<Zone> for DropZone {
    fn from(zone: Zone) -> Self {
        match zone {
            Zone::Favourites => DropZone::Favourites,
            Zone::Results => DropZone::Results,
        }
    }
}

pub fn run<S: KeyValueStorage>(command: Command, app: &mut App<S>) -> anyhow::Result<()> {
    match command {
        Command::Search(args) => {
            let criteria = args.inputs().parse();
            let results = app.apply_filters(criteria);

            println!("Results: {}", results.len());
            println!();
            for (i, listing) in results.iter().enumerate() {
                print_listing(i + 1, listing);
            }
            println!("Favourites: {}", app.favourite_count());
        }
        Command::Show { id } => match app.detail(&ListingId::new(id)) {
            DetailView::Found(detail) => {
                let listing = detail.listing;
                println!("{} • {} bed", listing.property_type, listing.bedrooms);
                println!("{}  {}", detail.price_label, listing.location);
                println!("Postcode: {}", detail.postcode);
                println!();
                println!("{}", detail.description);
                println!();
                println!("Images: {}", detail.gallery.join(", "));
                println!("Floorplan: {}", detail.floorplan);
                println!("Map: {}", detail.map_link);
            }
            DetailView::NotFound { id } => {
                println!("Property not found: {id}");
            }
        },
        Command::Favourites(command) => run_favourites(command, app)?,
        Command::Drag { intent, id } => {
            let id = ListingId::new(id);
            let payload = match intent {
                Intent::Add => DragPayload::Add(id),
                Intent::Remove => DragPayload::Remove(id),
            };
            println!("{}", payload.encode());
        }
        Command::Drop { zone, payload } => {
            let outcome = app.drop_on(zone.into(), &payload)?;
            println!("{}", drop_message(&outcome));
            println!("Favourites: {}", app.favourite_count());
        }
    }
    Ok(())
}

fn run_favourites<S: KeyValueStorage>(
    command: FavouritesCommand,
    app: &mut App<S>,
) -> anyhow::Result<()> {
    match command {
        FavouritesCommand::List => {
            println!("Favourites: {}", app.favourite_count());
            println!();
            for (i, entry) in app.favourites().iter().enumerate() {
                print_listing(i + 1, entry.listing());
            }
        }
        FavouritesCommand::Add { id } => {
            let id = ListingId::new(id);
            match app.add_favourite_by_id(&id)? {
                FavouriteOutcome::UnknownListing => println!("Property not found: {id}"),
                FavouriteOutcome::AlreadyFavourite => println!("{id} is already a favourite"),
                _ => println!("Saved {id}"),
            }
        }
        FavouritesCommand::Remove { id } => {
            let id = ListingId::new(id);
            match app.remove_favourite(&id)? {
                FavouriteOutcome::Removed => println!("Removed {id}"),
                _ => println!("{id} is not a favourite"),
            }
        }
        FavouritesCommand::Clear => {
            app.clear_favourites()?;
            println!("Favourites cleared");
        }
    }
    Ok(())
}

fn drop_message(outcome: &DropOutcome) -> String {
    match outcome {
        DropOutcome::Added(id) => format!("Saved {id}"),
        DropOutcome::AlreadyFavourite(id) => format!("{id} is already a favourite"),
        DropOutcome::Removed(id) => format!("Removed {id}"),
        DropOutcome::NotFavourite(id) => format!("{id} is not a favourite"),
        DropOutcome::Ignored(IgnoreReason::Malformed) => {
            "Ignored: payload is not a property drag".to_string()
        }
        DropOutcome::Ignored(IgnoreReason::WrongZone) => {
            "Ignored: that drag does not belong in this zone".to_string()
        }
        DropOutcome::Ignored(IgnoreReason::UnknownListing) => {
            "Ignored: property not found".to_string()
        }
    }
}

fn print_listing(n: usize, listing: &Listing) {
    println!(
        "{}. {} • {} bed ({})",
        n,
        listing.property_type,
        listing.bedrooms,
        property_search::detail::price_label(listing.price)
    );
    println!("   {}", listing.location);
    if let Some(added) = &listing.added {
        let day = added.day.map(|d| d.to_string()).unwrap_or_default();
        let year = added.year.map(|y| y.to_string()).unwrap_or_default();
        println!(
            "   Added: {} {} {}",
            day,
            added.month.as_deref().unwrap_or_default(),
            year
        );
    }
    println!("   ID: {}", listing.id);
    println!();
}
