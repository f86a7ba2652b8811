//! Tests for the planning model facade.

use hppt_model::{
    CrosshairParameters, ExperimentParameters, ExperimentType, HyspecPptModel, ModQUpdate,
    PlotType, SingleCrystalParameters,
};

/// Same tolerance as `numpy.isclose`.
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-8 + 1e-5 * expected.abs(),
        "expected {expected}, got {actual}"
    );
}

fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn planning_model(plot_type: PlotType) -> HyspecPptModel {
    let mut model = HyspecPptModel::new();
    model.set_experiment_data(ExperimentParameters {
        ei: 20.0,
        s2: 60.0,
        alpha_p: 30.0,
        plot_type,
    });
    model
}

#[test]
fn set_and_get_single_crystal_data() {
    let mut model = HyspecPptModel::new();
    let params = SingleCrystalParameters {
        a: 3.9,
        b: 4.1,
        c: 12.7,
        alpha: 90.0,
        beta: 101.5,
        gamma: 90.0,
        h: 0.5,
        k: 0.0,
        l: -1.0,
    };
    model.set_single_crystal_data(params);
    let stored = model.get_single_crystal_data();
    assert_eq!(stored.a, 3.9);
    assert_eq!(stored.b, 4.1);
    assert_eq!(stored.c, 12.7);
    assert_eq!(stored.alpha, 90.0);
    assert_eq!(stored.beta, 101.5);
    assert_eq!(stored.gamma, 90.0);
    assert_eq!(stored.h, 0.5);
    assert_eq!(stored.k, 0.0);
    assert_eq!(stored.l, -1.0);
}

#[test]
fn set_and_get_experiment_data() {
    let mut model = HyspecPptModel::new();
    model.set_experiment_data(ExperimentParameters {
        ei: 10.0,
        s2: 35.0,
        alpha_p: 45.0,
        plot_type: PlotType::Alpha,
    });
    let stored = model.get_experiment_data();
    assert_eq!(stored.ei, 10.0);
    assert_eq!(stored.s2, 35.0);
    assert_eq!(stored.alpha_p, 45.0);
    assert_eq!(stored.plot_type, PlotType::Alpha);
}

#[test]
fn set_and_get_crosshair_data() {
    let mut model = HyspecPptModel::new();
    model.set_crosshair_data(ExperimentType::Powder, 20.0, 1.0);
    assert_eq!(
        model.get_crosshair_data(),
        CrosshairParameters {
            delta_e: 20.0,
            mod_q: 1.0
        }
    );

    model.set_single_crystal_data(SingleCrystalParameters::default());
    let update = model.set_crosshair_data(ExperimentType::SingleCrystal, 30.0, 1.0);
    assert_eq!(update, ModQUpdate::Derived(0.0));
    assert_eq!(model.get_crosshair_data().delta_e, 30.0);
    assert_eq!(model.get_crosshair_data().mod_q, 0.0);

    model.set_single_crystal_data(SingleCrystalParameters {
        h: 10.0,
        k: 10.0,
        l: 10.0,
        ..SingleCrystalParameters::default()
    });
    // reported |Q| follows the lattice even above the ceiling
    assert_close(model.get_crosshair_data().mod_q, 108.827);
    assert_eq!(model.crosshair().get().mod_q, 0.0);
}

#[test]
fn single_crystal_crosshair_above_ceiling_is_rejected() {
    let mut model = HyspecPptModel::new();
    model.set_single_crystal_data(SingleCrystalParameters {
        h: 10.0,
        k: 10.0,
        l: 10.0,
        ..SingleCrystalParameters::default()
    });
    let update = model.set_crosshair_data(ExperimentType::SingleCrystal, 30.0, 1.0);
    match update {
        ModQUpdate::Rejected { derived } => assert_close(derived, 108.827),
        other => panic!("expected rejection, got {other:?}"),
    }
    // neither the derived value nor the caller's input was stored
    assert_eq!(
        model.crosshair().get(),
        CrosshairParameters {
            delta_e: 30.0,
            mod_q: 0.0
        }
    );
}

#[test]
fn calculate_graph_data_alpha() {
    let graph = planning_model(PlotType::Alpha).calculate_graph_data();

    assert_close(min(&graph.q_low), 1.55338);
    assert_close(max(&graph.q_low), 2.30880);
    assert_close(min(&graph.q_hi), 3.25839);
    assert_close(max(&graph.q_hi), 5.3811);

    assert_eq!(graph.e.len(), 200);
    assert_eq!(graph.e[0], -20.0);
    assert_eq!(graph.e[199], 18.0);

    assert_eq!(graph.q2d[(0, 0)], 0.0);
    assert_eq!(graph.q2d[(0, 1)], 0.0);
    assert_close(graph.q2d[(199, 0)], 5.38106);
    assert_close(graph.q2d[(199, 1)], 5.38106);

    assert_close(graph.e2d[(0, 0)], -20.0);
    assert_close(graph.e2d[(0, 199)], 18.0);

    let ang = graph.grid("ang_PQ").expect("alpha grid");
    assert!(ang[(0, 0)].is_nan());
    assert!(ang[(84, 4)].is_nan());
    assert_close(ang[(84, 5)], 166.59943);
    assert_close(ang[(199, 0)], 114.73561);
    assert!(ang[(199, 1)].is_nan());
}

#[test]
fn calculate_graph_data_cos2_alpha() {
    let graph = planning_model(PlotType::Cos2Alpha).calculate_graph_data();

    assert_close(min(&graph.q_low), 1.55338);
    assert_close(max(&graph.q_hi), 5.3811);
    assert!(graph.grid("ang_PQ").is_none());

    let cos2 = graph.grid("cos2_ang_PQ").expect("cos2 grid");
    assert!(cos2[(0, 0)].is_nan());
    assert!(cos2[(84, 4)].is_nan());
    assert_close(cos2[(84, 5)], 166.59943f64.to_radians().cos().powi(2));
    assert_close(cos2[(199, 0)], 114.73561f64.to_radians().cos().powi(2));
    assert!(cos2[(199, 1)].is_nan());
}

#[test]
fn calculate_graph_data_cos2_plus_1_div_2() {
    let graph = planning_model(PlotType::Cos2AlphaPlus1Div2).calculate_graph_data();
    let values = graph
        .grid("cos2_ang_PQ_plus_1_div_2")
        .expect("(1+cos2)/2 grid");
    assert!(values[(0, 0)].is_nan());
    assert!(values[(84, 4)].is_nan());
    assert_close(
        values[(84, 5)],
        (166.59943f64.to_radians().cos().powi(2) + 1.0) / 2.0,
    );
    assert_close(
        values[(199, 0)],
        (114.73561f64.to_radians().cos().powi(2) + 1.0) / 2.0,
    );
    assert!(values[(199, 1)].is_nan());
}

#[test]
fn calculate_graph_data_cos2_minus_sin2() {
    let graph = planning_model(PlotType::Cos2MinusSin2Alpha).calculate_graph_data();
    let values = graph
        .grid("cos2_minus_sin2_ang_PQ")
        .expect("cos2-sin2 grid");
    let angle = 166.59943f64.to_radians();
    assert_close(values[(84, 5)], angle.cos().powi(2) - angle.sin().powi(2));
    assert!(values[(84, 4)].is_nan());
}

#[test]
fn every_call_recomputes_from_current_state() {
    let mut model = planning_model(PlotType::Alpha);
    let before = model.calculate_graph_data();
    let again = model.calculate_graph_data();
    assert_eq!(before.q_hi, again.q_hi);
    // NaN cells must match too, so compare bit patterns
    assert!(
        before
            .angular
            .values()
            .iter()
            .zip(again.angular.values())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    );

    model.set_experiment_data(ExperimentParameters {
        ei: 50.0,
        ..model.get_experiment_data()
    });
    let after = model.calculate_graph_data();
    assert_eq!(after.e[0], -50.0);
    assert_close(after.e[199], 45.0);
}

#[test]
fn default_instrument_covers_forward_scattering() {
    // S2 = 30 puts the low tank edge at 0 degrees, so Q_low touches zero at
    // the elastic line
    let graph = HyspecPptModel::new().calculate_graph_data();
    let elastic = graph
        .e
        .iter()
        .position(|&e| e >= 0.0)
        .expect("elastic sample");
    assert!(graph.q_low[elastic] < 0.1);
    assert_eq!(graph.plot_type, PlotType::Cos2Alpha);
}

#[test]
fn plot_type_catalogue() {
    let listing = PlotType::all()
        .iter()
        .map(|plot_type| format!("{} => {plot_type}", plot_type.key()))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(listing, @r"
    ang_PQ => α_s
    cos2_ang_PQ => cos²α_s
    cos2_ang_PQ_plus_1_div_2 => (1+cos²α_s)/2
    cos2_minus_sin2_ang_PQ => cos²α_s-sin²α_s
    ");
}
