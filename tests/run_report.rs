use std::{env, fs, process, thread, time::Duration};

use gnn_bench::{
    configs::Config,
    dataset::{Dataset, EdgeListGraph, Tensor},
    metadata::{minibatch_meta, train_meta},
    probe::StaticProbe,
    report::{write_report, RunReport},
    LogStep, Logger, Timer,
};
use serde_json::{json, Value};

fn step(epoch: usize, loss: f64, eval_acc: f64, epoch_time: f64, acc_time: f64) -> LogStep {
    LogStep {
        epoch,
        eval_acc,
        sample_time: 0.0,
        load_time: 0.0,
        forward_time: 0.0,
        backward_time: 0.0,
        cur_epoch_time: epoch_time,
        acc_epoch_time: acc_time,
        evaluate_time: 0.0,
        loss,
    }
}

fn dataset() -> Dataset {
    Dataset {
        graph: EdgeListGraph::new(3, [(0, 1), (1, 2)]).add_self_loops(),
        feat: None,
        label: Tensor::from_vec(vec![0, 1, 1]),
        train_idx: Tensor::from_vec(vec![0]),
        val_idx: Tensor::from_vec(vec![1]),
        test_idx: Tensor::from_vec(vec![2]),
        num_classes: 2,
        in_feats: 4,
    }
}

#[test]
fn two_epochs_project_in_order() {
    let mut logger = Logger::new();
    logger.append(step(0, 1.2, 0.3, 1.0, 1.0));
    logger.append(step(1, 1.0, 0.4, 1.0, 2.0));

    let meta = train_meta(&Config::with_defaults("/data"));
    let report = RunReport::new(&meta, &logger);
    let losses: Vec<_> = report.steps.iter().map(|s| s["loss"].clone()).collect();
    assert_eq!(losses, vec![json!(1.2), json!(1.0)]);
}

#[test]
fn timed_epochs_are_written_to_the_log_file() {
    let path = env::temp_dir().join(format!("gnn-bench-report-{}.json", process::id()));
    let config = Config {
        log_file: path.clone(),
        ..Config::with_defaults("/data")
    };

    let mut timer = Timer::new();
    let mut logger = Logger::new();
    let mut acc = 0.0;
    for epoch in 0..3 {
        timer.start().unwrap();
        thread::sleep(Duration::from_millis(2));
        let sample = timer.record().unwrap().as_secs_f64();
        let total = timer.stop().unwrap().as_secs_f64();
        assert!(sample <= total);

        acc += total;
        logger.append(step(epoch, 1.0 / (epoch + 1) as f64, 0.5, total, acc));
    }

    let meta = minibatch_meta(&config, &dataset(), &StaticProbe::new("cpu", vec![]));
    write_report(&config.log_file, &meta, &logger).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(written["meta"]["num_node"], 3);
    assert_eq!(written["meta"]["num_edge"], 5);
    assert_eq!(written["meta"]["feat_width"], 4);
    assert_eq!(written["meta"]["train_mode"], "minibatch");

    let steps = written["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    for (i, s) in steps.iter().enumerate() {
        assert_eq!(s["epoch"], i);
        assert_eq!(s.as_object().unwrap().len(), 10);
    }
    let last = steps[2]["acc_epoch_time"].as_f64().unwrap();
    assert!((last - acc).abs() < 1e-9);
}
