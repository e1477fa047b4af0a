#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use connect_four::{
    init_logging, ConsoleRenderer, Game, GameConfig, LineInput, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

#[derive(Parser)]
#[command(author, version, about = "Two-player Connect Four in the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"], default_values = ["X", "O"])]
    marks: Vec<String>,
    #[arg(long, default_value_t = 0, help = "Id of the player who moves first (0 or 1)")]
    first: u8,
    #[arg(
        long,
        help = "Resume from a grid: '/'-separated columns, bottom-up, using 0, 1 and . (e.g. 01/1//0)"
    )]
    grid: Option<String>,
    #[arg(long, help = "Do not clear the terminal before drawing the board")]
    no_clear: bool,
}

#[cfg(feature = "std")]
impl Cli {
    fn into_config(self) -> anyhow::Result<GameConfig> {
        let marks: [String; 2] = self
            .marks
            .try_into()
            .map_err(|_| anyhow::anyhow!("expected exactly two marks"))?;
        Ok(GameConfig {
            width: self.width,
            height: self.height,
            marks,
            first_player: self.first,
            grid: self.grid,
        })
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let clear = !cli.no_clear;
    let config = cli.into_config()?;
    let mut game = Game::from_config(&config).map_err(|e| anyhow::anyhow!(e))?;

    let mut input = LineInput::stdin();
    let mut renderer = ConsoleRenderer::stdout().with_clear_screen(clear);
    let result = game.run(&mut input, &mut renderer)?;
    log::info!("result: {:?}", result);
    Ok(())
}
