use crate::models::Game;

static GAMES: [Game; 6] = [
    Game {
        id: "1",
        name: "Cricket",
        description: "Professional cricket pitch with all equipment provided. Perfect for team matches and practice sessions.",
        price: 2500,
        duration: 3.0,
        image: "https://images.pexels.com/photos/163452/basketball-dunk-blue-game-163452.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Game {
        id: "2",
        name: "Badminton",
        description: "Indoor badminton court with high-quality wooden flooring and professional lighting.",
        price: 800,
        duration: 1.0,
        image: "https://images.pexels.com/photos/209977/pexels-photo-209977.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Game {
        id: "3",
        name: "Futsal",
        description: "Indoor football court with artificial turf and professional goal posts.",
        price: 1800,
        duration: 2.0,
        image: "https://images.pexels.com/photos/114296/pexels-photo-114296.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Game {
        id: "4",
        name: "Basketball",
        description: "Full-size basketball court with adjustable hoops and professional flooring.",
        price: 1200,
        duration: 2.0,
        image: "https://images.pexels.com/photos/358042/pexels-photo-358042.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Game {
        id: "5",
        name: "Tennis",
        description: "Professional tennis court with clay surface and quality nets.",
        price: 1500,
        duration: 1.5,
        image: "https://images.pexels.com/photos/209977/pexels-photo-209977.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
    Game {
        id: "6",
        name: "Table Tennis",
        description: "Multiple table tennis tables in air-conditioned environment.",
        price: 400,
        duration: 1.0,
        image: "https://images.pexels.com/photos/163452/basketball-dunk-blue-game-163452.jpeg?auto=compress&cs=tinysrgb&w=400",
    },
];

/// All bookable games, in display order.
pub fn games() -> &'static [Game] {
    &GAMES
}

pub fn find_game(id: &str) -> Option<&'static Game> {
    GAMES.iter().find(|game| game.id == id)
}
