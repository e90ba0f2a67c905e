//! Seed content - the worlds a fresh game can start from.

/// Name of the sentinel element that a combination yields when it makes nothing.
pub const NOTHING_NAME: &str = "nothing";

/// The four basic elements every fresh world starts with, as `(id, name)`.
///
/// Each one lives in a category of the same name.
pub const BASIC_ELEMENTS: [(u32, &str); 4] = [(1, "fire"), (2, "water"), (3, "earth"), (4, "air")];

/// A hand-authored starter world in save format.
///
/// Only the four basics are known; every other element waits to be discovered.
pub const STARTER_CONTENT: &str = "\
nothing;q;k;u;
c;fire
b;1;fire;q;k;u;
u;6;magma;q;k;u;1,3;
u;11;volcano;q;k;u;3,6;6,11;
c;water
b;2;water;q;k;u;
u;32;ice;q;k;u;2,24;
u;36;geyser;q;k;u;2,11;
c;earth
b;3;earth;q;k;u;
u;7;stone;q;k;u;2,6;
u;10;mud;q;k;u;2,3;
u;12;swamp;q;k;u;2,10;
u;23;sand;q;k;u;7,13;
u;43;clay;q;k;u;1,10;
u;50;iron;q;k;u;1,7;
c;air
b;4;air;q;k;u;
u;5;steam;q;k;u;1,2;
u;8;cloud;q;k;u;4,5;5,8;
u;9;rain;q;k;u;2,8;
u;15;storm;q;k;u;9,13;8,9;13,33;
u;31;wind;q;k;u;4,13;13,31;
u;33;snow;q;k;u;9,32;
c;life
u;13;energy;q;k;u;1,4;
u;14;life;q;k;u;12,13;
u;16;golem;q;k;u;10,14;
u;22;plant;q;k;u;12,14;
u;25;time;q;k;u;23,24;
u;48;tree;q;k;u;2,22;
c;creatures
u;17;fish;q;k;u;2,14;
u;19;amphibian;q;k;u;3,17;
u;20;reptile;q;k;u;12,19;
u;34;fat fish;q;k;u;17,18;
u;38;shark;q;k;u;17,26;
u;41;bird;q;k;u;4,20;
c;humanity
u;18;food;q;k;u;1,17;
u;21;human;q;k;u;14,16;18,21;
u;26;corpse;q;k;u;1,21;11,21;
u;40;stoner;q;k;u;8,21;
c;building materials
u;24;glass;q;k;u;1,23;
u;44;brick;q;k;u;1,43;
c;myths and legends
u;27;zombie;q;k;u;14,26;
u;28;wizard;q;k;u;13,21;
u;29;necromancer;q;k;u;27,28;
u;30;pyromancer;q;k;u;1,28;
u;37;mermaid;q;k;u;17,21;
u;39;sharknado;q;k;u;15,38;
u;42;phoenix;q;k;u;1,41;
u;49;dragon;q;k;u;1,20;
c;tools
u;35;aquarium;q;k;u;17,24;24,34;11,35;
u;47;terrarium;q;k;u;19,35;
c;buildings
u;45;house;q;k;u;24,44;
u;46;sauna;q;k;u;5,45;
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_content_shape() {
        let mut lines = STARTER_CONTENT.lines();
        assert!(lines.next().unwrap().starts_with(NOTHING_NAME));

        let categories = STARTER_CONTENT.lines().filter(|l| l.starts_with("c;")).count();
        let basics = STARTER_CONTENT.lines().filter(|l| l.starts_with("b;")).count();
        assert_eq!(categories, 11);
        assert_eq!(basics, BASIC_ELEMENTS.len());
    }

    #[test]
    fn test_basic_ids_are_not_the_sentinel() {
        assert!(BASIC_ELEMENTS.iter().all(|(id, _)| *id != 0));
    }
}
