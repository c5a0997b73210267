mod layer_bottleneck;
mod layer_depthwise_conv2d;
