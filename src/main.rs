use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use convert_collection::demo::{RosterConfig, User, UserDto, init_logging};
use convert_collection::convert::{convert_to_list, sort_and_convert_list};
use convert_collection::{ContainerKind, ConversionPlan};

/// Which field of each converted user to print.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Field {
    #[default]
    Name,
    Points,
}

impl Field {
    fn show(&self, dto: &UserDto) -> String {
        match self {
            Field::Name => dto.name.clone(),
            Field::Points => dto.points.to_string(),
        }
    }
}

/// Sort key applied to users or to their converted views.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortKey {
    /// Keep roster order.
    None,
    Name,
    Points,
}

/// When the sort runs relative to conversion.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Order {
    /// Sort source users, then convert.
    #[default]
    Before,
    /// Convert, then sort the converted views.
    After,
}

#[derive(Parser)]
#[command(name = "convert-collection")]
#[command(about = "Convert a roster of users into views and print them")]
struct Cli {
    /// TOML roster file (uses the built-in roster if not specified)
    #[arg(long, env = "CONVERT_ROSTER")]
    roster: Option<PathBuf>,

    /// Field to print for each converted user
    #[arg(long, value_enum, default_value_t = Field::Name)]
    field: Field,

    /// Sort key (prints the input-order and name-sorted listings if neither
    /// this nor --container is given)
    #[arg(long, value_enum)]
    sort: Option<SortKey>,

    /// Sort before or after conversion
    #[arg(long, value_enum, default_value_t = Order::Before)]
    order: Order,

    /// Output container: list, hash-set, linked-set or tree-set
    #[arg(long)]
    container: Option<ContainerKind>,

    /// Log filter directive (overrides the roster file's logging.level)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.roster {
        Some(path) => RosterConfig::from_file(path)?,
        None => RosterConfig::default(),
    };

    let mut logging = config.logging.clone();
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    init_logging(&logging)?;

    let users = config.users();
    tracing::info!(users = users.len(), "roster loaded");

    if cli.sort.is_none() && cli.container.is_none() {
        print_listings(&users, cli.field);
        return Ok(());
    }

    let mut plan = build_plan(
        cli.sort.unwrap_or(SortKey::None),
        cli.order,
        cli.container.unwrap_or_default(),
    );
    tracing::debug!(?plan, "plan built");

    let views = plan.run(&users)?;
    for dto in views.iter() {
        println!("{}", cli.field.show(dto));
    }

    Ok(())
}

/// Input-order listing followed by a name-sorted listing.
fn print_listings(users: &[User], field: Field) {
    for dto in convert_to_list(users, UserDto::from) {
        println!("{}", field.show(&dto));
    }

    println!("\n\t Sorted users");
    for dto in sort_and_convert_list(users, |a, b| a.name.cmp(&b.name), UserDto::from) {
        println!("{}", field.show(&dto));
    }
}

fn build_plan<'a>(
    key: SortKey,
    order: Order,
    container: ContainerKind,
) -> ConversionPlan<'a, &'a User, UserDto> {
    let plan = ConversionPlan::new()
        .convert(|user: &User| UserDto::from(user))
        .container(container);

    match (key, order) {
        (SortKey::None, _) => plan,
        (SortKey::Name, Order::Before) => {
            plan.sort_before(|a: &&User, b: &&User| a.name.cmp(&b.name))
        }
        (SortKey::Points, Order::Before) => {
            plan.sort_before(|a: &&User, b: &&User| a.points.cmp(&b.points))
        }
        (SortKey::Name, Order::After) => {
            plan.sort_after(|a: &UserDto, b: &UserDto| a.name.cmp(&b.name))
        }
        (SortKey::Points, Order::After) => {
            plan.sort_after(|a: &UserDto, b: &UserDto| a.points.cmp(&b.points))
        }
    }
}
