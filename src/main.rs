use move_preview::board::Board;
use move_preview::mock::Scene;

fn main() {
    let board = Board::initial();
    let scene = Scene::starting();
    move_preview::visualization::run_interactive_terminal(&board, scene);
}
