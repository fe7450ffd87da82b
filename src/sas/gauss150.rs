//! # 150 点 Gauss-Legendre 求积表
//!
//! 区间 [-1, 1] 上的节点与权重，节点按升序排列，权重之和为 2。
//! 双精度数值，由 50 位精度的 Newton 迭代生成后舍入。
//!
//! ## 依赖关系
//! - 被 `sas/quadrature.rs` 包装为 `GAUSS150`
//! - 纯静态数据，无外部依赖

/// 节点数
pub const GAUSS150_N: usize = 150;

/// 节点 (升序)
#[rustfmt::skip]
pub const GAUSS150_Z: [f64; GAUSS150_N] = [
    -0.9998723404457334, -0.9993274305065947, -0.9983473449340834,
    -0.9969322929775997, -0.995082864525529, -0.9927998590434373,
    -0.9900842691660192, -0.9869372772712794, -0.9833602541697529,
    -0.9793547582425894, -0.9749225346595943, -0.9700655145738373,
    -0.9647858142586956, -0.9590857341746905, -0.9529677579610971,
    -0.9464345513503147, -0.9394889610042837, -0.9321340132728527,
    -0.9243729128743134, -0.9162090414984952, -0.9076459563329236,
    -0.8986873885126239, -0.8893372414942055, -0.8795995893549102,
    -0.8694786750173527, -0.8589789084007133, -0.8481048644991847,
    -0.8368612813885015, -0.825253058161423, -0.8132852527930605,
    -0.8009630799369827, -0.7882919086530552, -0.7752772600680049,
    -0.7619248049697269, -0.7482403613363824, -0.7342298918013638,
    -0.7198995010552305, -0.7052554331857488, -0.6903040689571928,
    -0.6750519230300931, -0.6595056411226444, -0.6436719971150083,
    -0.6275578900977726, -0.6111703413658551, -0.594516491359159,
    -0.5776035965513142, -0.5604390262878617, -0.5430302595752547,
    -0.5253848818220803, -0.5075105815339176, -0.48941514696327526,
    -0.4711064627160662, -0.4525925063160997, -0.4338813447290861,
    -0.4149811308476706, -0.3959000999390257, -0.37664656605655217,
    -0.3572289184172501, -0.33765561774634, -0.31793519259072595,
    -0.29807623560290714, -0.2780873997969574, -0.2579773947782034,
    -0.2377549829482451, -0.2174289756869712, -0.19700822951323418,
    -0.1765016422258567, -0.15591814902665158, -0.13526671862714448,
    -0.11455634934069557, -0.09379606516172284, -0.07299491183373581,
    -0.05216195290789248, -0.03130626579379715, -0.010436937804259772,
    0.010436937804259772, 0.03130626579379715, 0.05216195290789248,
    0.07299491183373581, 0.09379606516172284, 0.11455634934069557,
    0.13526671862714448, 0.15591814902665158, 0.1765016422258567,
    0.19700822951323418, 0.2174289756869712, 0.2377549829482451,
    0.2579773947782034, 0.2780873997969574, 0.29807623560290714,
    0.31793519259072595, 0.33765561774634, 0.3572289184172501,
    0.37664656605655217, 0.3959000999390257, 0.4149811308476706,
    0.4338813447290861, 0.4525925063160997, 0.4711064627160662,
    0.48941514696327526, 0.5075105815339176, 0.5253848818220803,
    0.5430302595752547, 0.5604390262878617, 0.5776035965513142,
    0.594516491359159, 0.6111703413658551, 0.6275578900977726,
    0.6436719971150083, 0.6595056411226444, 0.6750519230300931,
    0.6903040689571928, 0.7052554331857488, 0.7198995010552305,
    0.7342298918013638, 0.7482403613363824, 0.7619248049697269,
    0.7752772600680049, 0.7882919086530552, 0.8009630799369827,
    0.8132852527930605, 0.825253058161423, 0.8368612813885015,
    0.8481048644991847, 0.8589789084007133, 0.8694786750173527,
    0.8795995893549102, 0.8893372414942055, 0.8986873885126239,
    0.9076459563329236, 0.9162090414984952, 0.9243729128743134,
    0.9321340132728527, 0.9394889610042837, 0.9464345513503147,
    0.9529677579610971, 0.9590857341746905, 0.9647858142586956,
    0.9700655145738373, 0.9749225346595943, 0.9793547582425894,
    0.9833602541697529, 0.9869372772712794, 0.9900842691660192,
    0.9927998590434373, 0.995082864525529, 0.9969322929775997,
    0.9983473449340834, 0.9993274305065947, 0.9998723404457334,
];

/// 权重
#[rustfmt::skip]
pub const GAUSS150_WT: [f64; GAUSS150_N] = [
    0.0003276086705537684, 0.0007624720932121182, 0.0011976474864696246,
    0.0016323569986105091, 0.00206636649241382, 0.002499478988894452,
    0.002931503683655863, 0.0033622516236778313, 0.0037915348363451048,
    0.004219166142991912, 0.0046449591497965455, 0.005068728293945588,
    0.005490288909448688, 0.005909457300590107, 0.006326050818470396,
    0.006739887938743109, 0.007150788339685551, 0.007558572980178164,
    0.00796306417736331, 0.008364085683847519, 0.008761462764358014,
    0.009155022271788797, 0.009544592722584911, 0.009930004371421155,
    0.010311089285135968, 0.010687681415884095, 0.011059616673473443,
    0.01142673299685284, 0.011788870424718377, 0.012145871165206781,
    0.01249757966464489, 0.012843842675324903, 0.013184509322275623,
    0.01351943116900037, 0.013848462282152812, 0.01417145929512244,
    0.014488281470501867, 0.014798790761408732, 0.015102851871635398,
    0.01540033231460023, 0.015691102471074758, 0.01597503564566151,
    0.016252008121997927, 0.016521899216662306, 0.016784591331758206,
    0.017039970006154512, 0.01728792396535869, 0.01752834517000162,
    0.01776112886291282, 0.017986173614765497, 0.018203381368271675,
    0.01841265748090798, 0.01861391076615358, 0.018807053533222266,
    0.01899200162527134, 0.01916867445607072, 0.01933699504511622,
    0.019496890051171747, 0.019648289804225783, 0.01979112833584824,
    0.019925343407934427, 0.020050876539823657, 0.020167673033780625,
    0.020275681998828503, 0.020374856372923304, 0.020465152943459932,
    0.020546532366100923, 0.020618959181919683, 0.02068240183285078,
    0.020736832675440527, 0.020782227992891873, 0.02081856800539839,
    0.020845836878762777, 0.02086402273129619, 0.020873117638995388,
    0.020873117638995388, 0.02086402273129619, 0.020845836878762777,
    0.02081856800539839, 0.020782227992891873, 0.020736832675440527,
    0.02068240183285078, 0.020618959181919683, 0.020546532366100923,
    0.020465152943459932, 0.020374856372923304, 0.020275681998828503,
    0.020167673033780625, 0.020050876539823657, 0.019925343407934427,
    0.01979112833584824, 0.019648289804225783, 0.019496890051171747,
    0.01933699504511622, 0.01916867445607072, 0.01899200162527134,
    0.018807053533222266, 0.01861391076615358, 0.01841265748090798,
    0.018203381368271675, 0.017986173614765497, 0.01776112886291282,
    0.01752834517000162, 0.01728792396535869, 0.017039970006154512,
    0.016784591331758206, 0.016521899216662306, 0.016252008121997927,
    0.01597503564566151, 0.015691102471074758, 0.01540033231460023,
    0.015102851871635398, 0.014798790761408732, 0.014488281470501867,
    0.01417145929512244, 0.013848462282152812, 0.01351943116900037,
    0.013184509322275623, 0.012843842675324903, 0.01249757966464489,
    0.012145871165206781, 0.011788870424718377, 0.01142673299685284,
    0.011059616673473443, 0.010687681415884095, 0.010311089285135968,
    0.009930004371421155, 0.009544592722584911, 0.009155022271788797,
    0.008761462764358014, 0.008364085683847519, 0.00796306417736331,
    0.007558572980178164, 0.007150788339685551, 0.006739887938743109,
    0.006326050818470396, 0.005909457300590107, 0.005490288909448688,
    0.005068728293945588, 0.0046449591497965455, 0.004219166142991912,
    0.0037915348363451048, 0.0033622516236778313, 0.002931503683655863,
    0.002499478988894452, 0.00206636649241382, 0.0016323569986105091,
    0.0011976474864696246, 0.0007624720932121182, 0.0003276086705537684,
];
