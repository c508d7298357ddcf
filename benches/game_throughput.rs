use criterion::{black_box, criterion_group, criterion_main, Criterion};
use war_machine::cards::standard_deck;
use war_machine::core::{GameRng, RuleConfig};
use war_machine::games::war::WarMachine;
use war_machine::players::{PlayerDeck, Preset};

fn full_game(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("warrior vs wizard", |b| {
        b.iter(|| {
            seed += 1;
            let players = vec![
                PlayerDeck::new(Preset::Warrior.name(), Preset::Warrior.stats()),
                PlayerDeck::new(Preset::Wizard.name(), Preset::Wizard.stats()),
            ];
            let mut game = WarMachine::new(standard_deck(), players, RuleConfig::default(), GameRng::new(seed));
            black_box(game.play_game())
        })
    });
}

fn swap_phase(c: &mut Criterion) {
    c.bench_function("deal and swap, three presets", |b| {
        b.iter(|| {
            let players = Preset::ALL
                .iter()
                .map(|p| PlayerDeck::new(p.name(), p.stats()))
                .collect();
            black_box(WarMachine::new(standard_deck(), players, RuleConfig::default(), GameRng::new(1)))
        })
    });
}

criterion_group!(benches, full_game, swap_phase);
criterion_main!(benches);
