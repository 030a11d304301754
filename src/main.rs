use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sliding_puzzle::game::board::SIZE;
use sliding_puzzle::game::get_valid_moves::get_valid_moves;
use sliding_puzzle::game::index_of_blank::index_of_blank;
use sliding_puzzle::game::shuffle_board::shuffle_board;
use sliding_puzzle::logging::setup_logging;
use sliding_puzzle::scores::database::ScoreDatabase;
use sliding_puzzle::servers::{WebConfig, WebServer};

#[derive(Parser, Debug)]
#[command(name = "sliding_puzzle")]
struct Config {
    /// Port for the score server
    #[arg(short = 'p', long, default_value_t = 5000)]
    port: u16,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Path to the SQLite database holding the leaderboard
    #[arg(long, default_value = "data/scores.db")]
    db_path: String,

    /// Directory with the built browser client
    #[arg(long, default_value = "web")]
    static_dir: String,

    /// Mode de fonctionnement
    #[arg(long, value_enum, default_value = "serve")]
    mode: RunMode,

    /// RNG seed for the demo shuffle (random when absent)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum RunMode {
    /// Serve the score API and the static client
    Serve,
    /// Print one shuffled board and its legal moves, then exit
    Demo,
}

fn print_shuffled_board(seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let board = shuffle_board(&mut rng);

    for row in board.tiles.chunks(SIZE) {
        let cells: Vec<String> = row
            .iter()
            .map(|&t| {
                if t == 0 {
                    ".".to_string()
                } else {
                    t.to_string()
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }

    let blank = index_of_blank(&board);
    println!("blank at {}, movable tiles: {:?}", blank, get_valid_moves(blank));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    setup_logging()?;

    match config.mode {
        RunMode::Demo => {
            print_shuffled_board(config.seed);
        }
        RunMode::Serve => {
            // Ensure the data directory exists before SQLite opens the file
            if let Some(parent) = std::path::Path::new(&config.db_path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            let db = ScoreDatabase::new(&config.db_path)?;
            log::info!("Leaderboard database: {}", config.db_path);

            let web_config = WebConfig {
                port: config.port,
                host: config.host.clone(),
                static_dir: config.static_dir.clone(),
            };
            WebServer::new(web_config, db).start().await?;
        }
    }

    Ok(())
}
